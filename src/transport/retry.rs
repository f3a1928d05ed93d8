//! Retry with exponential backoff
//!
//! Only rate limiting (HTTP 429) and network-level failures are retried.
//! Any other status is handed back untouched for the caller to inspect.
//!
//! Delay before retry `n` (0-based) is `base_delay * 2^n`, so with the
//! defaults (3 retries, 1s base) the total wait is at most 1 + 2 + 4 = 7s.

use super::http::{HttpTransport, RawResponse};
use crate::errors::TransportError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Default number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay for exponential backoff (1 second)
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;

/// Backoff parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    max_retries: u32,

    /// Base delay in milliseconds
    base_delay_ms: u64,

    /// Enable ±25% jitter
    enable_jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryPolicy {
    /// Create policy with default settings
    pub fn new() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            enable_jitter: false,
        }
    }

    /// Create policy with custom settings
    pub fn with_config(max_retries: u32, base_delay_ms: u64) -> Self {
        Self {
            max_retries,
            base_delay_ms,
            enable_jitter: false,
        }
    }

    /// Policy that never retries
    pub fn no_retry() -> Self {
        Self::with_config(0, 0)
    }

    pub fn with_jitter(mut self, enable: bool) -> Self {
        self.enable_jitter = enable;
        self
    }

    /// Delay before retry number `attempt` (0-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let delay_ms = self
            .base_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt));

        let final_delay = if self.enable_jitter {
            let jitter = (delay_ms / 4) as i64;
            let random_jitter = (rand::random::<f64>() * 2.0 - 1.0) * jitter as f64;
            ((delay_ms as i64) + random_jitter as i64).max(0) as u64
        } else {
            delay_ms
        };

        Duration::from_millis(final_delay)
    }

    /// Total backoff when every retry is used (without jitter)
    pub fn max_total_wait_time(&self) -> Duration {
        let total_ms = (0..self.max_retries)
            .map(|attempt| self.base_delay_ms.saturating_mul(2u64.saturating_pow(attempt)))
            .fold(0u64, |acc, d| acc.saturating_add(d));

        Duration::from_millis(total_ms)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn base_delay_ms(&self) -> u64 {
        self.base_delay_ms
    }
}

/// Transport decorator applying a `RetryPolicy`
pub struct RetryTransport<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: HttpTransport> RetryTransport<T> {
    pub fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for RetryTransport<T> {
    async fn post_json(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> std::result::Result<RawResponse, TransportError> {
        let mut attempt: u32 = 0;

        loop {
            let outcome = self.inner.post_json(url, payload).await;

            let error = match outcome {
                Ok(response) if response.is_rate_limited() => {
                    TransportError::RateLimited { attempts: attempt + 1 }
                }
                Ok(response) => return Ok(response),
                Err(e @ TransportError::UpstreamServerError { .. }) => return Err(e),
                Err(e) => e,
            };

            if attempt >= self.policy.max_retries {
                warn!(attempts = attempt + 1, error = %error, "Giving up on upstream request");
                return Err(error);
            }

            let delay = self.policy.delay_for(attempt);
            debug!(
                attempt = attempt + 1,
                max_attempts = self.policy.max_retries + 1,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "Retrying upstream request"
            );
            sleep(delay).await;
            attempt += 1;
        }
    }
}
