//! Fallback content module
//!
//! Static catalogs and the selection functions used whenever generation
//! fails.

pub mod catalog;
pub mod selector;

// Re-export commonly used items
pub use selector::{
    affirmation_candidates, fallback_affirmation, fallback_chat_text, fallback_chat_text_for,
    fallback_mood_text, fallback_quick_wins, FALLBACK_ID_PREFIX,
};
