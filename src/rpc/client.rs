//! HTTP transport for communicating with an Ethereum node's JSON-RPC endpoint.

use crate::utils::config::DEFAULT_RPC_TIMEOUT;
use crate::utils::error::TransportError;
use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Raw answer of the host: status code plus undecoded body
#[derive(Debug, Clone, PartialEq)]
pub struct HostResponse {
    pub status: u16,
    pub body: String,
}

impl HostResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single JSON POST to a URL.
///
/// Implementations own connection reuse. A non-2xx status is a response,
/// not an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: String) -> Result<HostResponse, TransportError>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default request timeout
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_RPC_TIMEOUT)
    }

    /// Create a transport with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::RequestFailed)?;

        Ok(Self { client })
    }

    /// Create a transport with no timeout of its own, for callers that
    /// bound the request themselves
    pub fn without_timeout() -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(TransportError::RequestFailed)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HostResponse, TransportError> {
        debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Host answered HTTP {} ({} bytes)", status, body.len());

        Ok(HostResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_response_status_boundaries() {
        assert!(HostResponse::new(200, "").is_success());
        assert!(HostResponse::new(204, "").is_success());
        assert!(HostResponse::new(299, "").is_success());
        assert!(!HostResponse::new(199, "").is_success());
        assert!(!HostResponse::new(300, "").is_success());
        assert!(!HostResponse::new(400, "").is_success());
        assert!(!HostResponse::new(503, "").is_success());
    }
}
