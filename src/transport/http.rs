//! Single-attempt HTTP transport
//!
//! `HttpTransport` is the seam between the engine and the network. The
//! reqwest implementation makes exactly one attempt per call; retrying is
//! layered on top by `RetryTransport`.

use crate::errors::{CompanionError, Result, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Default request timeout (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and body of an HTTP reply, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// POST a JSON payload and hand back the raw reply
///
/// Implementations return `Ok` for every HTTP status and reserve `Err` for
/// failures where no reply was received.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> std::result::Result<RawResponse, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create transport with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create transport with a custom per-request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CompanionError::HttpError)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> std::result::Result<RawResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::NetworkFailure(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::NetworkFailure(e.without_url().to_string()))?;

        Ok(RawResponse { status, body })
    }
}
