use thiserror::Error;

/// Rejected user input. Both variants are user-fixable and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ZIP code must be 5 numeric digits.")]
    InvalidZip,

    #[error("country code must be 2-3 alphabetic characters (e.g., US, CA, GBR).")]
    InvalidCountry,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("request URL is {len} characters long, limit is {max}")]
    TooLong { len: usize, max: usize },
}

/// The response buffer could not grow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("out of memory while buffering {requested} bytes of response body")]
    OutOfMemory { requested: usize },
}

/// Every way a single weather request can fail after input was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// DNS, TLS, connect, timeout or buffering failure.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Final status after redirects was not 200.
    #[error("Weather service returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Weather service returned empty response.")]
    EmptyBody,
}

impl From<BufferError> for FetchError {
    fn from(err: BufferError) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest's top-level message is terse ("error sending request"),
        // the useful diagnostic usually sits further down the chain.
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        FetchError::Transport(message)
    }
}
