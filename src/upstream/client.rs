//! Gemini API client
//!
//! Posts a `GenerateContentRequest` through an `HttpTransport` and returns
//! the decoded envelope. Non-success statuses become `UpstreamServerError`.

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::Config;
use crate::errors::{CompanionError, GenerationFailure, ParseError, Result, TransportError};
use crate::transport::{HttpTransport, ReqwestTransport, RetryTransport};
use reqwest::Url;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Default Gemini API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Upstream content generation client
#[derive(Clone)]
pub struct GeminiClient {
    transport: Arc<dyn HttpTransport>,
    request_url: Url,
    model: String,
}

impl GeminiClient {
    /// Build a client with the reqwest transport and retry policy from `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key().ok_or_else(|| {
            CompanionError::ConfigError(
                "Gemini API key not found (set GEMINI_API_KEY or upstream.api_key)".to_string(),
            )
        })?;

        let http = ReqwestTransport::with_timeout(config.request_timeout())?;
        let transport = RetryTransport::new(http, config.retry_policy());

        Self::with_transport(
            Arc::new(transport),
            &config.upstream.base_url,
            &config.upstream.model,
            &api_key,
        )
    }

    /// Build a client over any transport
    pub fn with_transport(
        transport: Arc<dyn HttpTransport>,
        base_url: &str,
        model: &str,
        api_key: &str,
    ) -> Result<Self> {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model
        );
        let request_url = Url::parse_with_params(&endpoint, &[("key", api_key)])
            .map_err(|e| CompanionError::ConfigError(format!("Invalid upstream URL: {}", e)))?;

        Ok(Self {
            transport,
            request_url,
            model: model.to_string(),
        })
    }

    /// Send one generation request
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> std::result::Result<GenerateContentResponse, GenerationFailure> {
        let payload = serde_json::to_value(request)
            .map_err(|e| ParseError::InvalidJson(e.to_string()))?;

        debug!(
            model = %self.model,
            turns = request.contents.len(),
            "Sending generateContent request"
        );

        let response = self
            .transport
            .post_json(self.request_url.as_str(), &payload)
            .await?;

        if !response.is_success() {
            warn!(status = response.status, "Upstream returned non-success status");
            return Err(TransportError::UpstreamServerError {
                status: response.status,
                body: response.body,
            }
            .into());
        }

        let envelope = serde_json::from_str::<GenerateContentResponse>(&response.body)
            .map_err(|e| ParseError::InvalidJson(e.to_string()))?;

        Ok(envelope)
    }

    /// Get current model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Endpoint without the credential
    pub fn endpoint(&self) -> String {
        let mut url = self.request_url.clone();
        url.set_query(None);
        url.to_string()
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint())
            .field("model", &self.model)
            .finish()
    }
}
