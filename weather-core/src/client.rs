use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::fmt::Debug;

use crate::{buffer::ResponseBuffer, config::ClientConfig, error::FetchError, model::WeatherReport};

/// Final status and full body of one GET, redirects already followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: ResponseBuffer,
}

/// Anything that can perform a single GET.
///
/// Implementations report only transport-level failures; status codes are
/// classified by [`fetch`].
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError>;
}

/// reqwest-backed transport. Dropping it releases the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        // reqwest follows up to 10 redirects by default.
        let http = Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to initialize HTTP client: {e}")))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let mut res = self.http.get(url).send().await?;

        let status = res.status().as_u16();
        if res.url().as_str() != url {
            debug!("redirected to {}", res.url());
        }

        let mut body = ResponseBuffer::new();
        while let Some(chunk) = res.chunk().await? {
            body.append(&chunk)?;
        }

        Ok(RawResponse { status, body })
    }
}

/// Perform one request and classify the result.
pub async fn fetch(transport: &dyn Transport, url: &str) -> Result<WeatherReport, FetchError> {
    debug!("GET {url}");
    let RawResponse { status, body } = transport.get(url).await?;
    debug!("HTTP {status}, {} body bytes", body.len());

    if status != 200 {
        return Err(FetchError::HttpStatus(status));
    }
    if body.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    Ok(WeatherReport { status, body })
}
