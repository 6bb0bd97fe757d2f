//! wttr.in request URLs.
//!
//! Postal and country codes are embedded without percent-encoding. That is
//! only sound because [`Location`] can't hold anything but ASCII digits and
//! letters; see [`crate::validate`].

use crate::{
    error::UrlError,
    model::{Location, OutputMode, WeatherQuery},
};

pub const WTTR_BASE_URL: &str = "https://wttr.in";

/// Upper bound on the length of a built URL.
pub const MAX_URL_LEN: usize = 256;

/// `%C` is the condition, `%t` the temperature.
const TEXT_FORMAT: &str = "%C+%t";
const JSON_FORMAT: &str = "j1";

pub fn build_url(location: &Location, mode: OutputMode) -> Result<String, UrlError> {
    let format = match mode {
        OutputMode::Json => JSON_FORMAT,
        OutputMode::Text => TEXT_FORMAT,
    };

    let url = format!(
        "{WTTR_BASE_URL}/{},{}?format={format}",
        location.zip(),
        location.country()
    );

    if url.len() > MAX_URL_LEN {
        return Err(UrlError::TooLong { len: url.len(), max: MAX_URL_LEN });
    }

    Ok(url)
}

impl WeatherQuery {
    pub fn url(&self) -> Result<String, UrlError> {
        build_url(&self.location, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> Location {
        Location::new("10001", "US").unwrap()
    }

    #[test]
    fn text_mode_url() {
        assert_eq!(
            build_url(&us(), OutputMode::Text).unwrap(),
            "https://wttr.in/10001,US?format=%C+%t"
        );
    }

    #[test]
    fn json_mode_url() {
        assert_eq!(
            build_url(&us(), OutputMode::Json).unwrap(),
            "https://wttr.in/10001,US?format=j1"
        );
    }

    #[test]
    fn query_delegates_to_builder() {
        let query = WeatherQuery {
            location: Location::new("94105", "usa").unwrap(),
            mode: OutputMode::Json,
        };
        assert_eq!(query.url().unwrap(), "https://wttr.in/94105,usa?format=j1");
    }

    #[test]
    fn validated_inputs_stay_well_under_the_limit() {
        let loc = Location::new("99999", "ABC").unwrap();
        let url = build_url(&loc, OutputMode::Text).unwrap();
        assert!(url.len() < MAX_URL_LEN);
    }
}
