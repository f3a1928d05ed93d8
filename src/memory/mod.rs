//! Short-term memory module
//!
//! Process-lifetime anti-repetition history for generated affirmations.

pub mod repetition;

// Re-export commonly used types
pub use repetition::{RepetitionTracker, DEFAULT_HISTORY_CAPACITY};
