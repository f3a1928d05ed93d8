//! Type definitions module
//!
//! Conversation turns, wellness content and generation request/result types.

pub mod messages;
pub use messages::ConversationTurn;

pub mod content;
pub use content::{Affirmation, AffirmationKind, Category, MoodAction, QuickWin, TimeOfDay};

pub mod generation;
pub use generation::{
    ContentSource, Generated, GenerationRequest, GenerationResult, DEFAULT_QUICK_WIN_COUNT,
};
