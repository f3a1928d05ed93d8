//! Request payload construction per generation mode
//!
//! All builders are pure and total: validation happens before they are
//! called, so any input reaching them yields a payload.

use super::templates;
use crate::types::{ConversationTurn, MoodAction, TimeOfDay};
use crate::upstream::{
    Content, GenerateContentRequest, GenerationConfig, HarmBlockThreshold, HarmCategory, Role,
    SafetySetting,
};

/// Safety thresholds applied to open-ended and structured generation
pub fn standard_safety_settings() -> Vec<SafetySetting> {
    [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ]
    .into_iter()
    .map(|category| SafetySetting {
        category,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    })
    .collect()
}

pub fn chat_generation_config() -> GenerationConfig {
    GenerationConfig {
        temperature: 0.8,
        top_k: 40,
        top_p: 0.95,
        max_output_tokens: 1024,
    }
}

pub fn mood_generation_config() -> GenerationConfig {
    GenerationConfig {
        temperature: 0.9,
        top_k: 40,
        top_p: 0.95,
        max_output_tokens: 512,
    }
}

pub fn structured_generation_config() -> GenerationConfig {
    GenerationConfig {
        temperature: 0.9,
        top_k: 50,
        top_p: 0.95,
        max_output_tokens: 1024,
    }
}

/// Persona turn followed by every non-blank turn in order
fn conversation_contents<'a>(turns: impl IntoIterator<Item = &'a ConversationTurn>) -> Vec<Content> {
    let mut contents = vec![Content::model(templates::COMPANION_PERSONA)];

    contents.extend(turns.into_iter().filter(|turn| !turn.is_blank()).map(|turn| {
        let role = if turn.is_user { Role::User } else { Role::Model };
        Content::new(role, turn.text.clone())
    }));

    contents
}

/// Open conversation: persona, history, then the new user message
pub fn build_chat_request(
    current_message: &str,
    history: &[ConversationTurn],
) -> GenerateContentRequest {
    let current = ConversationTurn::user(current_message);

    GenerateContentRequest {
        contents: conversation_contents(history.iter().chain(std::iter::once(&current))),
        generation_config: chat_generation_config(),
        safety_settings: Some(standard_safety_settings()),
    }
}

/// Mood button: persona, history, then the action's instruction
pub fn build_mood_request(
    action: MoodAction,
    history: &[ConversationTurn],
) -> GenerateContentRequest {
    let mut contents = conversation_contents(history);
    contents.push(Content::user(templates::mood_instruction(action)));

    GenerateContentRequest {
        contents,
        generation_config: mood_generation_config(),
        safety_settings: None,
    }
}

/// Quick wins: single instruction turn, no history
pub fn build_quick_wins_request(count: usize, time_of_day: TimeOfDay) -> GenerateContentRequest {
    structured_request(templates::quick_wins_prompt(count, time_of_day))
}

/// Mood-tailored quick wins: single instruction turn, no history
pub fn build_personalized_quick_wins_request(
    user_mood: &str,
    completed_tasks: &[String],
) -> GenerateContentRequest {
    structured_request(templates::personalized_quick_wins_prompt(
        user_mood,
        completed_tasks,
    ))
}

/// Affirmation: single instruction turn listing recent texts to avoid
pub fn build_affirmation_request(
    is_premium: bool,
    recent_texts: &[String],
) -> GenerateContentRequest {
    structured_request(templates::affirmation_prompt(is_premium, recent_texts))
}

fn structured_request(prompt: String) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user(prompt)],
        generation_config: structured_generation_config(),
        safety_settings: Some(standard_safety_settings()),
    }
}
