//! Response parsing module
//!
//! Pulls text out of the upstream envelope and turns structured replies
//! into validated drafts.

pub mod envelope;
pub mod structured;

// Re-export commonly used items
pub use envelope::extract_text;
pub use structured::{
    find_embedded_json, parse_affirmation, parse_json_payload, parse_quick_wins,
    strip_code_fences, AffirmationDraft, QuickWinDraft,
};
