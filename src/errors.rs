//! Error types for the Unburden content engine
//!
//! Three kinds of failure exist and they travel differently:
//! - `ValidationError`: malformed caller input, always propagated
//! - `TransportError`: upstream unreachable or refusing, absorbed into fallback
//! - `ParseError`: upstream answered with unusable content, absorbed into fallback

use thiserror::Error;

/// Failures of the HTTP layer after retries were applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Upstream kept answering HTTP 429
    #[error("Rate limited by upstream after {attempts} attempts")]
    RateLimited { attempts: u32 },

    /// Connection, DNS, TLS or timeout failure
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// Upstream answered with a non-success status other than 429
    #[error("Upstream server error: HTTP {status}")]
    UpstreamServerError { status: u16, body: String },
}

/// Failures extracting usable content from an upstream reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Envelope has no candidate with a text part
    #[error("No candidates in upstream response")]
    NoCandidates,

    /// Candidate text is empty or whitespace
    #[error("Upstream response text is empty")]
    EmptyText,

    /// Text could not be parsed as JSON
    #[error("Invalid JSON in upstream response: {0}")]
    InvalidJson(String),

    /// JSON parsed but a required field is missing
    #[error("Upstream response is missing required field '{field}'")]
    SchemaMismatch { field: &'static str },
}

/// Caller programming errors, rejected before any network activity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Message is required and must be a non-empty string")]
    EmptyMessage,

    #[error("Mood description is required and must be a non-empty string")]
    EmptyMood,

    #[error("Quick win count must be positive")]
    NonPositiveCount,

    #[error("Invalid action '{0}'. Must be one of: better, distract, reflect")]
    UnknownMoodAction(String),

    #[error("Invalid time of day '{0}'. Must be one of: morning, afternoon, evening")]
    UnknownTimeOfDay(String),
}

/// Anything that makes a single generation attempt fall back
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum CompanionError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Generation state machine errors
    #[error("Invalid state transition from {from} on {event}")]
    InvalidTransition { from: String, event: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, CompanionError>;

impl From<GenerationFailure> for CompanionError {
    fn from(err: GenerationFailure) -> Self {
        match err {
            GenerationFailure::Transport(e) => CompanionError::Transport(e),
            GenerationFailure::Parse(e) => CompanionError::Parse(e),
        }
    }
}
