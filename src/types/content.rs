//! Wellness content types: mood actions, quick wins and affirmations
//!
//! String forms of the enums are the wire forms used by the app and by the
//! model's JSON output. Parsing an unknown string is a `ValidationError`;
//! nothing is coerced to a default here.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood buttons offered after a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodAction {
    /// User reports feeling better
    Better,
    /// User wants a gentle distraction
    Distract,
    /// User wants to reflect on the conversation
    Reflect,
}

impl MoodAction {
    pub const ALL: [MoodAction; 3] = [MoodAction::Better, MoodAction::Distract, MoodAction::Reflect];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodAction::Better => "better",
            MoodAction::Distract => "distract",
            MoodAction::Reflect => "reflect",
        }
    }
}

impl FromStr for MoodAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "better" => Ok(MoodAction::Better),
            "distract" => Ok(MoodAction::Distract),
            "reflect" => Ok(MoodAction::Reflect),
            other => Err(ValidationError::UnknownMoodAction(other.to_string())),
        }
    }
}

impl fmt::Display for MoodAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-of-day framing for quick wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    #[default]
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            other => Err(ValidationError::UnknownTimeOfDay(other.to_string())),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quick win category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Physical,
    #[default]
    Mental,
    Social,
    Creative,
    Mindful,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Physical,
        Category::Mental,
        Category::Social,
        Category::Creative,
        Category::Mindful,
    ];

    /// Lenient lookup used on model output; `None` means "apply the default"
    pub fn from_model(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "physical" => Some(Category::Physical),
            "mental" => Some(Category::Mental),
            "social" => Some(Category::Social),
            "creative" => Some(Category::Creative),
            "mindful" => Some(Category::Mindful),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Physical => "physical",
            Category::Mental => "mental",
            Category::Social => "social",
            Category::Creative => "creative",
            Category::Mindful => "mindful",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short self-contained wellness task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickWin {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub category: Category,
}

impl QuickWin {
    /// New, not yet completed task with an id of the form `{prefix}-{uuid}`
    pub fn new(prefix: &str, text: impl Into<String>, category: Category) -> Self {
        Self {
            id: format!("{}-{}", prefix, uuid::Uuid::new_v4()),
            text: text.into(),
            completed: false,
            category,
        }
    }
}

/// Kind of inspirational message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffirmationKind {
    #[default]
    Affirmation,
    Proverb,
    Quote,
    Mantra,
}

impl AffirmationKind {
    /// Lenient lookup used on model output; `None` means "apply the default"
    pub fn from_model(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "affirmation" => Some(AffirmationKind::Affirmation),
            "proverb" => Some(AffirmationKind::Proverb),
            "quote" => Some(AffirmationKind::Quote),
            "mantra" => Some(AffirmationKind::Mantra),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AffirmationKind::Affirmation => "affirmation",
            AffirmationKind::Proverb => "proverb",
            AffirmationKind::Quote => "quote",
            AffirmationKind::Mantra => "mantra",
        }
    }
}

impl fmt::Display for AffirmationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inspirational message with optional attribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affirmation {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: AffirmationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}
