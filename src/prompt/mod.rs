//! Prompt construction module
//!
//! Instruction templates and the per-mode payload builders.

pub mod builder;
pub mod templates;

// Re-export commonly used items
pub use builder::{
    build_affirmation_request, build_chat_request, build_mood_request,
    build_personalized_quick_wins_request, build_quick_wins_request, standard_safety_settings,
};
pub use templates::COMPANION_PERSONA;
