//! Generation module
//!
//! The public facade plus the per-call phase tracking it relies on.

pub mod facade;
pub mod state;

// Re-export commonly used types
pub use facade::{
    ContentGenerator, PERSONALIZED_ID_PREFIX, PERSONALIZED_QUICK_WIN_COUNT, UPSTREAM_ID_PREFIX,
};
pub use state::{GenerationPhase, GenerationTrace, PhaseEvent};
