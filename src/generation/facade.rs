//! Content generation facade
//!
//! One operation per generation mode. Each call validates its input,
//! builds a prompt, asks the upstream model and parses the reply. Any
//! transport or parse failure is logged and answered with curated content,
//! so once validation passes a call always returns something usable.

use super::state::{GenerationTrace, PhaseEvent};
use crate::config::Config;
use crate::errors::{GenerationFailure, ParseError, Result, ValidationError};
use crate::fallback;
use crate::memory::RepetitionTracker;
use crate::parser::{self, AffirmationDraft, QuickWinDraft};
use crate::prompt;
use crate::types::{
    Affirmation, ConversationTurn, Generated, GenerationRequest, GenerationResult, MoodAction,
    QuickWin, TimeOfDay,
};
use crate::upstream::{GeminiClient, GenerateContentRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Id prefix of quick wins produced by the upstream model
pub const UPSTREAM_ID_PREFIX: &str = "ai";

/// Id prefix of mood-tailored quick wins produced by the upstream model
pub const PERSONALIZED_ID_PREFIX: &str = "mood";

/// Number of tasks in a mood-tailored batch
pub const PERSONALIZED_QUICK_WIN_COUNT: usize = 3;

/// Orchestrates prompt building, upstream calls, parsing and fallback
#[derive(Debug, Clone)]
pub struct ContentGenerator {
    client: GeminiClient,
    tracker: Arc<RepetitionTracker>,
}

impl ContentGenerator {
    pub fn new(client: GeminiClient, tracker: Arc<RepetitionTracker>) -> Self {
        Self { client, tracker }
    }

    /// Build client and tracker from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = GeminiClient::from_config(config)?;
        let tracker = Arc::new(RepetitionTracker::with_capacity(config.history.capacity));
        Ok(Self::new(client, tracker))
    }

    pub fn tracker(&self) -> &Arc<RepetitionTracker> {
        &self.tracker
    }

    pub fn client(&self) -> &GeminiClient {
        &self.client
    }

    /// Dispatch a tagged request to its operation
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GenerationResult, ValidationError> {
        let result = match request {
            GenerationRequest::Chat {
                current_message,
                history,
            } => GenerationResult::Text(self.generate_chat_reply(current_message, history).await?),
            GenerationRequest::MoodAction { action, history } => {
                GenerationResult::Text(self.generate_mood_response(*action, history).await)
            }
            GenerationRequest::QuickWins { count, time_of_day } => GenerationResult::QuickWins(
                self.generate_quick_wins(*count, *time_of_day).await?,
            ),
            GenerationRequest::PersonalizedQuickWins {
                user_mood,
                completed_tasks,
            } => GenerationResult::QuickWins(
                self.generate_personalized_quick_wins(user_mood, completed_tasks)
                    .await?,
            ),
            GenerationRequest::Affirmation { is_premium } => {
                GenerationResult::Affirmation(self.generate_affirmation(*is_premium).await)
            }
        };

        Ok(result)
    }

    /// Companion reply to `message` given the conversation so far
    pub async fn generate_chat_reply(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> std::result::Result<Generated<String>, ValidationError> {
        let mut trace = GenerationTrace::start("chat");

        if message.trim().is_empty() {
            trace.advance(PhaseEvent::ValidationFailed);
            return Err(ValidationError::EmptyMessage);
        }
        trace.advance(PhaseEvent::InputValidated);

        let request = prompt::build_chat_request(message, history);
        let outcome = self.request_text(&request, &mut trace).await;

        Ok(settle(&mut trace, outcome, |_| Ok(()), |text, _| text, |failure| {
            fallback::fallback_chat_text_for(failure)
        }))
    }

    /// Reply to a mood button
    pub async fn generate_mood_response(
        &self,
        action: MoodAction,
        history: &[ConversationTurn],
    ) -> Generated<String> {
        let mut trace = GenerationTrace::start("mood_action");
        trace.advance(PhaseEvent::InputValidated);

        let request = prompt::build_mood_request(action, history);
        let outcome = self.request_text(&request, &mut trace).await;

        settle(&mut trace, outcome, |_| Ok(()), |text, _| text, |_| {
            fallback::fallback_mood_text(action)
        })
    }

    /// Batch of `count` quick wins framed for `time_of_day`
    pub async fn generate_quick_wins(
        &self,
        count: usize,
        time_of_day: TimeOfDay,
    ) -> std::result::Result<Generated<Vec<QuickWin>>, ValidationError> {
        let mut trace = GenerationTrace::start("quick_wins");

        if count == 0 {
            trace.advance(PhaseEvent::ValidationFailed);
            return Err(ValidationError::NonPositiveCount);
        }
        trace.advance(PhaseEvent::InputValidated);

        let request = prompt::build_quick_wins_request(count, time_of_day);
        Ok(self
            .quick_wins_from(&request, count, UPSTREAM_ID_PREFIX, &mut trace)
            .await)
    }

    /// Three quick wins tailored to the user's mood
    pub async fn generate_personalized_quick_wins(
        &self,
        user_mood: &str,
        completed_tasks: &[String],
    ) -> std::result::Result<Generated<Vec<QuickWin>>, ValidationError> {
        let mut trace = GenerationTrace::start("personalized_quick_wins");

        if user_mood.trim().is_empty() {
            trace.advance(PhaseEvent::ValidationFailed);
            return Err(ValidationError::EmptyMood);
        }
        trace.advance(PhaseEvent::InputValidated);

        let request = prompt::build_personalized_quick_wins_request(user_mood, completed_tasks);
        Ok(self
            .quick_wins_from(
                &request,
                PERSONALIZED_QUICK_WIN_COUNT,
                PERSONALIZED_ID_PREFIX,
                &mut trace,
            )
            .await)
    }

    /// One inspirational message, avoiding recently shown ones
    pub async fn generate_affirmation(&self, is_premium: bool) -> Generated<Affirmation> {
        let mut trace = GenerationTrace::start("affirmation");
        trace.advance(PhaseEvent::InputValidated);

        let recent = self.tracker.recent_texts();
        let request = prompt::build_affirmation_request(is_premium, &recent);
        let outcome = self.request_text(&request, &mut trace).await;

        let tracker = &self.tracker;
        settle(
            &mut trace,
            outcome,
            |text| parser::parse_affirmation(text),
            |_, draft: AffirmationDraft| {
                if draft.kind.is_none() {
                    debug!("Affirmation type missing or unknown, defaulting");
                }
                let affirmation = Affirmation {
                    text: draft.text,
                    kind: draft.kind.unwrap_or_default(),
                    author: draft.author,
                };
                tracker.record(affirmation.text.clone());
                affirmation
            },
            |_| fallback::fallback_affirmation(tracker),
        )
    }

    async fn quick_wins_from(
        &self,
        request: &GenerateContentRequest,
        count: usize,
        id_prefix: &str,
        trace: &mut GenerationTrace,
    ) -> Generated<Vec<QuickWin>> {
        let outcome = self.request_text(request, trace).await;

        settle(
            trace,
            outcome,
            |text| parser::parse_quick_wins(text),
            |_, drafts: Vec<QuickWinDraft>| normalize_quick_wins(drafts, count, id_prefix),
            |_| fallback::fallback_quick_wins(count),
        )
    }

    /// Sending phase: upstream call plus envelope text extraction
    async fn request_text(
        &self,
        request: &GenerateContentRequest,
        trace: &mut GenerationTrace,
    ) -> std::result::Result<String, GenerationFailure> {
        let envelope = match self.client.generate_content(request).await {
            Ok(envelope) => envelope,
            Err(GenerationFailure::Parse(e)) => {
                // Reply arrived but its envelope was unreadable
                trace.advance(PhaseEvent::ResponseReceived);
                return Err(e.into());
            }
            Err(e) => return Err(e),
        };
        trace.advance(PhaseEvent::ResponseReceived);

        parser::extract_text(&envelope).map_err(GenerationFailure::from)
    }
}

/// Parsing phase and the success/fallback decision
///
/// `parse` validates the extracted text, `accept` normalizes the parsed
/// value and `fall_back` produces curated content for the failure.
fn settle<P, T>(
    trace: &mut GenerationTrace,
    outcome: std::result::Result<String, GenerationFailure>,
    parse: impl FnOnce(&str) -> std::result::Result<P, ParseError>,
    accept: impl FnOnce(String, P) -> T,
    fall_back: impl FnOnce(&GenerationFailure) -> T,
) -> Generated<T> {
    let parsed = outcome.and_then(|text| match parse(&text) {
        Ok(value) => Ok((text, value)),
        Err(e) => Err(GenerationFailure::Parse(e)),
    });

    let result = match parsed {
        Ok((text, value)) => {
            trace.advance(PhaseEvent::ContentParsed);
            info!(mode = trace.mode(), "Generated content from upstream");
            Generated::upstream(accept(text, value))
        }
        Err(failure) => {
            trace.advance(match &failure {
                GenerationFailure::Transport(_) => PhaseEvent::TransportFailed,
                GenerationFailure::Parse(_) => PhaseEvent::ParseFailed,
            });
            warn!(mode = trace.mode(), error = %failure, "Generation failed, using fallback content");
            Generated::fallback(fall_back(&failure))
        }
    };

    trace.advance(PhaseEvent::ResultReturned);
    result
}

/// Assign fresh ids, default categories and cap the batch at `count`
fn normalize_quick_wins(
    drafts: Vec<QuickWinDraft>,
    count: usize,
    id_prefix: &str,
) -> Vec<QuickWin> {
    drafts
        .into_iter()
        .take(count)
        .map(|draft| {
            if draft.category.is_none() {
                debug!(text = %draft.text, "Quick win category missing or unknown, defaulting");
            }
            QuickWin::new(
                id_prefix,
                draft.text,
                draft.category.unwrap_or_default(),
            )
        })
        .collect()
}
