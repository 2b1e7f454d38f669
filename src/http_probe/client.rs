use std::time::Duration;

use reqwest::header::{ALT_SVC, CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use reqwest::{Client, Version};
use thiserror::Error;
use url::Url;

use super::describe;
use crate::config::model::ProbeConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum PingError {
    /// Connection refused, timeout, protocol negotiation failure and friends.
    #[error("{0}")]
    Transport(String),
    /// A response arrived but could not be interpreted as HTTP.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for PingError {
    fn from(err: reqwest::Error) -> Self {
        let description = describe(&err);
        if err.is_decode() {
            PingError::MalformedResponse(description)
        } else {
            PingError::Transport(description)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingResponse {
    pub status: u16,
    /// Negotiated protocol version, e.g. "HTTP/3.0".
    pub version: String,
}

/// Capability the probe loop depends on for issuing a single GET request.
#[allow(async_fn_in_trait)]
pub trait PingClient {
    async fn get(&self, target: &Url) -> Result<PingResponse, PingError>;
}

/// reqwest-backed client that asks for HTTP/3 on every request and never
/// serves from or writes to a cache.
pub struct H3Client {
    inner: Client,
}

impl H3Client {
    pub fn new(config: &ProbeConfig) -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        // Clears previously advertised alternate-protocol services so every
        // probe renegotiates instead of reusing a cached protocol decision.
        headers.insert(ALT_SVC, HeaderValue::from_static("clear"));

        let idle = Duration::from_millis(u64::from(config.idle_timeout));
        let mut builder = Client::builder()
            .default_headers(headers)
            .pool_idle_timeout(idle)
            .http3_max_idle_timeout(idle);

        if config.keep_alive > 0 {
            builder = builder.tcp_keepalive(Duration::from_secs(u64::from(config.keep_alive)));
        }

        Ok(Self {
            inner: builder.build()?,
        })
    }
}

impl PingClient for H3Client {
    async fn get(&self, target: &Url) -> Result<PingResponse, PingError> {
        let response = self
            .inner
            .get(target.clone())
            .version(Version::HTTP_3)
            .timeout(REQUEST_TIMEOUT)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        Ok(PingResponse {
            status: response.status().as_u16(),
            version: version_label(response.version()).to_string(),
        })
    }
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "UNKNOWN",
    }
}
