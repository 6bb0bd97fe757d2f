use std::ffi::OsString;
use std::io::Write;

use anyhow::Context;
use clap::{Arg, ArgAction, Command, error::ErrorKind};
use log::debug;
use weather_core::{
    ClientConfig, DEFAULT_COUNTRY, FetchError, HttpTransport, Location, OutputMode, Transport,
    WeatherQuery, fetch,
};

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

const EXAMPLES: &str = "\
Example (text): weather 10001
Example (country): weather 10001 US
Example (json): weather --json 10001 US";

/// Command definition used for `--help`, `--version` and usage errors.
///
/// Argument scanning itself is done by [`Cli::try_parse_from`]: clap would
/// treat `--` and dash-prefixed values specially, and every non-flag word here
/// has to land in a positional slot as-is.
pub fn command() -> Command {
    Command::new("weather")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Current weather for a postal code, courtesy of wttr.in")
        .override_usage("weather [--json|-j] <zip_code> [country_code]")
        .after_help(EXAMPLES)
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the raw JSON weather document instead of a one-line summary"),
        )
        .arg(
            Arg::new("zip_code")
                .required(true)
                .help("5-digit numeric postal code, e.g. 10001"),
        )
        .arg(
            Arg::new("country_code")
                .default_value(DEFAULT_COUNTRY)
                .help("2-3 letter country code"),
        )
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub json: bool,
    pub zip: String,
    pub country: String,
}

/// Print a clap parse failure and pick the exit code.
///
/// `--help` and `--version` also arrive here and go to stdout with success.
pub fn report_parse_error(err: &clap::Error, stderr: &mut impl Write) -> anyhow::Result<u8> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print().context("failed to write help")?;
            Ok(EXIT_OK)
        }
        _ => {
            write!(stderr, "{}", err.render())?;
            writeln!(stderr, "{EXAMPLES}")?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// Let clap produce its help or version output for `flag`.
fn display_only(bin: &OsString, flag: &str) -> clap::Error {
    match command().try_get_matches_from([bin.clone(), OsString::from(flag)]) {
        Err(e) => e,
        Ok(_) => command().error(
            ErrorKind::UnknownArgument,
            format!("unexpected argument '{flag}' found"),
        ),
    }
}

impl Cli {
    /// Scan `argv` (program name first) left to right.
    ///
    /// `--json`/`-j` may appear anywhere. Every other word fills the postal
    /// code slot, then the country slot; a third one is a usage error.
    pub fn try_parse_from<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let bin = argv.next().unwrap_or_else(|| OsString::from("weather"));

        let mut json = false;
        let mut zip = None;
        let mut country = None;

        for arg in argv {
            let arg = arg.to_string_lossy().into_owned();
            match arg.as_str() {
                "--json" | "-j" => json = true,
                "--help" | "-h" | "--version" | "-V" => return Err(display_only(&bin, &arg)),
                _ if zip.is_none() => zip = Some(arg),
                _ if country.is_none() => country = Some(arg),
                _ => {
                    return Err(command().error(
                        ErrorKind::UnknownArgument,
                        format!("unexpected argument '{arg}' found"),
                    ));
                }
            }
        }

        let Some(zip) = zip else {
            return Err(command().error(
                ErrorKind::MissingRequiredArgument,
                "the following required arguments were not provided:\n  <zip_code>",
            ));
        };

        Ok(Self {
            json,
            zip,
            country: country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        })
    }

    pub fn parse() -> Result<Self, clap::Error> {
        Self::try_parse_from(std::env::args_os())
    }

    pub async fn run(self, stdout: &mut impl Write, stderr: &mut impl Write) -> anyhow::Result<u8> {
        self.run_with(|| HttpTransport::new(&ClientConfig::default()), stdout, stderr)
            .await
    }

    /// Validate, build the URL, fetch through a transport created by
    /// `connect`, and print.
    ///
    /// The transport only comes into existence once input is known to be good
    /// and is dropped before this returns, on every path.
    pub async fn run_with<T, F>(
        self,
        connect: F,
        stdout: &mut impl Write,
        stderr: &mut impl Write,
    ) -> anyhow::Result<u8>
    where
        T: Transport,
        F: FnOnce() -> Result<T, FetchError>,
    {
        let query = match self.query() {
            Ok(query) => query,
            Err(e) => {
                writeln!(stderr, "Error: {e}")?;
                return Ok(EXIT_FAILURE);
            }
        };

        let url = match query.url() {
            Ok(url) => url,
            Err(e) => {
                writeln!(stderr, "Error: {e}")?;
                return Ok(EXIT_FAILURE);
            }
        };

        let transport = match connect() {
            Ok(t) => t,
            Err(e) => {
                writeln!(stderr, "{e}")?;
                return Ok(EXIT_FAILURE);
            }
        };

        match fetch(&transport, &url).await {
            Ok(report) => {
                debug!("rendering {:?} output", query.mode);
                report
                    .write_to(&query, stdout)
                    .context("failed to write weather report")?;
                stdout.flush().context("failed to flush stdout")?;
                Ok(EXIT_OK)
            }
            Err(e) => {
                writeln!(stderr, "{e}")?;
                Ok(EXIT_FAILURE)
            }
        }
    }

    fn query(&self) -> Result<WeatherQuery, weather_core::ValidationError> {
        Ok(WeatherQuery {
            location: Location::new(self.zip.as_str(), self.country.as_str())?,
            mode: OutputMode::from_json_flag(self.json),
        })
    }
}
