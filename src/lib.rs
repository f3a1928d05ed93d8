//! Unburden v0.3.0 - Companion Content Engine
//!
//! Turns a hosted generative model into a gentle wellness companion:
//! empathetic chat replies, mood follow-ups, small "quick win" tasks and
//! daily affirmations. Every generation degrades to curated content when
//! the model is unreachable or answers with something unusable.
//!
//! # Architecture
//!
//! - **transport**: HTTP seam plus retry with exponential backoff
//! - **upstream**: Gemini wire types and client
//! - **prompt** / **parser**: request construction and reply validation
//! - **memory** / **fallback**: anti-repetition history and curated content
//! - **generation**: the facade tying it all together

pub mod errors;
pub mod types;
pub mod config;

// Upstream plumbing
pub mod transport;
pub mod upstream;

// Prompting and parsing
pub mod prompt;
pub mod parser;

// Content and orchestration
pub mod memory;
pub mod fallback;
pub mod generation;

pub mod cli;

// Re-export commonly used types
pub use config::Config;
pub use errors::{CompanionError, GenerationFailure, ParseError, Result, TransportError, ValidationError};
pub use generation::ContentGenerator;
pub use memory::RepetitionTracker;
pub use types::{
    Affirmation, AffirmationKind, Category, ContentSource, ConversationTurn, Generated,
    GenerationRequest, GenerationResult, MoodAction, QuickWin, TimeOfDay,
};
