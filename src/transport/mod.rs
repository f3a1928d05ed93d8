//! HTTP transport module
//!
//! Generic JSON POST transport plus an exponential-backoff retry layer.
//! Nothing here knows about prompts or the upstream response format.

pub mod http;
pub mod retry;

// Re-export commonly used types
pub use http::{HttpTransport, RawResponse, ReqwestTransport, DEFAULT_REQUEST_TIMEOUT};
pub use retry::{RetryPolicy, RetryTransport, DEFAULT_BASE_DELAY_MS, DEFAULT_MAX_RETRIES};
