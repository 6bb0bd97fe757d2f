use std::io::{self, Write};

use crate::{
    buffer::ResponseBuffer,
    error::ValidationError,
    validate::{is_valid_country, is_valid_zip},
};

pub const DEFAULT_COUNTRY: &str = "US";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One-line `condition temperature` summary.
    #[default]
    Text,
    /// Provider's raw `j1` JSON document, passed through unmodified.
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Text }
    }
}

/// A postal code and country code that have both passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    zip: String,
    country: String,
}

impl Location {
    /// Validates the postal code first, then the country code.
    pub fn new(zip: impl Into<String>, country: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();
        let country = country.into();

        if !is_valid_zip(&zip) {
            return Err(ValidationError::InvalidZip);
        }
        if !is_valid_country(&country) {
            return Err(ValidationError::InvalidCountry);
        }

        Ok(Self { zip, country })
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub location: Location,
    pub mode: OutputMode,
}

/// A 200 response with a non-empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub status: u16,
    pub body: ResponseBuffer,
}

impl WeatherReport {
    /// One-line text summary, without the trailing newline.
    pub fn summary(&self, location: &Location) -> String {
        format!(
            "ZIP {} ({}): {}",
            location.zip(),
            location.country(),
            self.body.to_string_lossy()
        )
    }

    /// Write the report followed by a newline.
    ///
    /// Json mode writes the body bytes untouched, even if they are not UTF-8.
    pub fn write_to(&self, query: &WeatherQuery, out: &mut impl Write) -> io::Result<()> {
        match query.mode {
            OutputMode::Json => out.write_all(self.body.as_bytes())?,
            OutputMode::Text => out.write_all(self.summary(&query.location).as_bytes())?,
        }
        out.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(body: &str) -> WeatherReport {
        let mut buf = ResponseBuffer::new();
        buf.append(body.as_bytes()).unwrap();
        WeatherReport { status: 200, body: buf }
    }

    #[test]
    fn location_checks_zip_before_country() {
        assert_eq!(Location::new("abc", "1"), Err(ValidationError::InvalidZip));
        assert_eq!(Location::new("10001", "1"), Err(ValidationError::InvalidCountry));
    }

    #[test]
    fn location_keeps_country_case() {
        let loc = Location::new("10001", "gbr").unwrap();
        assert_eq!(loc.zip(), "10001");
        assert_eq!(loc.country(), "gbr");
    }

    fn written(report: &WeatherReport, mode: OutputMode) -> Vec<u8> {
        let query = WeatherQuery { location: Location::new("10001", "US").unwrap(), mode };
        let mut out = Vec::new();
        report.write_to(&query, &mut out).unwrap();
        out
    }

    #[test]
    fn summarizes_text_report() {
        let loc = Location::new("10001", "US").unwrap();
        assert_eq!(report("Clear +15°C").summary(&loc), "ZIP 10001 (US): Clear +15°C");
        assert_eq!(
            written(&report("Clear +15°C"), OutputMode::Text),
            "ZIP 10001 (US): Clear +15°C\n".as_bytes()
        );
    }

    #[test]
    fn writes_json_body_verbatim() {
        let body = "{\"current_condition\": []}";
        assert_eq!(written(&report(body), OutputMode::Json), format!("{body}\n").as_bytes());
    }

    #[test]
    fn json_body_keeps_non_utf8_bytes() {
        let mut buf = ResponseBuffer::new();
        buf.append(b"{\"x\":\"\xff\xfe\"}").unwrap();
        let report = WeatherReport { status: 200, body: buf };

        assert_eq!(written(&report, OutputMode::Json), b"{\"x\":\"\xff\xfe\"}\n");
    }

    #[test]
    fn json_flag_selects_mode() {
        assert_eq!(OutputMode::from_json_flag(true), OutputMode::Json);
        assert_eq!(OutputMode::from_json_flag(false), OutputMode::Text);
    }
}
