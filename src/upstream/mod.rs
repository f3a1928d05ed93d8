//! Upstream model module
//!
//! Gemini wire types and the client that sends them.

pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    HarmBlockThreshold, HarmCategory, Part, Role, SafetySetting,
};
