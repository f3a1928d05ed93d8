//! Generation requests and normalized results
//!
//! Every result says where its content came from so callers can show a
//! soft hint when the companion is running on curated content.

use super::content::{Affirmation, MoodAction, QuickWin, TimeOfDay};
use super::messages::ConversationTurn;
use serde::{Deserialize, Serialize};

/// Default number of quick wins per batch
pub const DEFAULT_QUICK_WIN_COUNT: usize = 3;

fn default_quick_win_count() -> usize {
    DEFAULT_QUICK_WIN_COUNT
}

/// One request per generation mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GenerationRequest {
    Chat {
        #[serde(rename = "currentMessage")]
        current_message: String,
        #[serde(default)]
        history: Vec<ConversationTurn>,
    },
    MoodAction {
        action: MoodAction,
        #[serde(default)]
        history: Vec<ConversationTurn>,
    },
    QuickWins {
        #[serde(default = "default_quick_win_count")]
        count: usize,
        #[serde(default, rename = "timeOfDay")]
        time_of_day: TimeOfDay,
    },
    PersonalizedQuickWins {
        #[serde(rename = "userMood")]
        user_mood: String,
        #[serde(default, rename = "completedTasks")]
        completed_tasks: Vec<String>,
    },
    Affirmation {
        #[serde(default, rename = "isPremium")]
        is_premium: bool,
    },
}

/// Where a piece of content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Produced by the upstream model
    Upstream,
    /// Taken from the curated fallback library
    Fallback,
}

/// Content plus its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generated<T> {
    pub content: T,
    pub source: ContentSource,
}

impl<T> Generated<T> {
    /// Content produced by the upstream model
    pub fn upstream(content: T) -> Self {
        Self {
            content,
            source: ContentSource::Upstream,
        }
    }

    /// Content taken from the fallback library
    pub fn fallback(content: T) -> Self {
        Self {
            content,
            source: ContentSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ContentSource::Fallback
    }

    pub fn into_content(self) -> T {
        self.content
    }
}

/// Normalized result, discriminated by mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationResult {
    Text(Generated<String>),
    QuickWins(Generated<Vec<QuickWin>>),
    Affirmation(Generated<Affirmation>),
}

impl GenerationResult {
    pub fn source(&self) -> ContentSource {
        match self {
            GenerationResult::Text(g) => g.source,
            GenerationResult::QuickWins(g) => g.source,
            GenerationResult::Affirmation(g) => g.source,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source() == ContentSource::Fallback
    }

    /// Text of a text-mode result
    pub fn as_text(&self) -> Option<&str> {
        match self {
            GenerationResult::Text(g) => Some(g.content.as_str()),
            _ => None,
        }
    }
}
