//! Conversation turns exchanged between the user and the companion
//!
//! History is supplied by the caller on every request; the engine never
//! stores it.

use serde::{Deserialize, Serialize};

/// One message in a conversation, tagged by speaker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTurn {
    pub text: String,
    pub is_user: bool,
}

impl ConversationTurn {
    /// Turn spoken by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    /// Turn spoken by the companion
    pub fn companion(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }

    /// Whether the turn has any content once whitespace is removed
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
