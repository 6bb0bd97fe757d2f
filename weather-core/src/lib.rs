//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Postal/country code validation
//! - wttr.in request URL construction
//! - A single-shot HTTP client that buffers the response body
//! - Shared domain models (locations, queries, reports) and error types
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod buffer;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod request;
pub mod validate;

pub use buffer::ResponseBuffer;
pub use client::{HttpTransport, RawResponse, Transport, fetch};
pub use config::ClientConfig;
pub use error::{BufferError, FetchError, UrlError, ValidationError};
pub use model::{DEFAULT_COUNTRY, Location, OutputMode, WeatherQuery, WeatherReport};
pub use request::build_url;
