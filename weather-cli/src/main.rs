//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logger setup
//! - Human-friendly output and exit codes

use std::io;
use std::process::ExitCode;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let result = match cli::Cli::parse() {
        Ok(cmd) => cmd.run(&mut stdout, &mut stderr).await,
        Err(e) => cli::report_parse_error(&e, &mut stderr),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(cli::EXIT_FAILURE)
        }
    }
}
