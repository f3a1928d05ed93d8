//! Fallback content selection
//!
//! Selection is randomized so repeated failures still feel fresh. The only
//! side effect is recording chosen affirmations in the repetition tracker.

use super::catalog::{
    mood_fallback, AffirmationEntry, AFFIRMATIONS, CHAT_CONNECTION_FALLBACK, CHAT_FALLBACK,
    CHAT_LISTENING_FALLBACK, QUICK_WINS,
};
use crate::errors::{GenerationFailure, ParseError, TransportError};
use crate::memory::RepetitionTracker;
use crate::types::{Affirmation, MoodAction, QuickWin};
use rand::seq::SliceRandom;
use rand::Rng;

/// Id prefix of fallback quick wins
pub const FALLBACK_ID_PREFIX: &str = "fallback";

/// Characters compared when checking an affirmation against recent texts
pub const REPETITION_PREFIX_CHARS: usize = 20;

/// Fixed empathetic chat reply
pub fn fallback_chat_text() -> String {
    CHAT_FALLBACK.to_string()
}

/// Chat reply matched to why generation failed
///
/// Upstream refusals (non-success status, exhausted rate limit) get the
/// connection sentence and a reply with no candidates gets the listening
/// sentence. Everything else, network failures included, gets the generic one.
pub fn fallback_chat_text_for(failure: &GenerationFailure) -> String {
    let text = match failure {
        GenerationFailure::Transport(
            TransportError::UpstreamServerError { .. } | TransportError::RateLimited { .. },
        ) => CHAT_CONNECTION_FALLBACK,
        GenerationFailure::Parse(ParseError::NoCandidates) => CHAT_LISTENING_FALLBACK,
        _ => CHAT_FALLBACK,
    };
    text.to_string()
}

/// Fixed reply for a mood action
pub fn fallback_mood_text(action: MoodAction) -> String {
    mood_fallback(action).to_string()
}

/// Random selection of up to `count` distinct curated quick wins
pub fn fallback_quick_wins(count: usize) -> Vec<QuickWin> {
    fallback_quick_wins_with_rng(count, &mut rand::thread_rng())
}

pub fn fallback_quick_wins_with_rng<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<QuickWin> {
    QUICK_WINS
        .choose_multiple(rng, count.min(QUICK_WINS.len()))
        .map(|entry| QuickWin::new(FALLBACK_ID_PREFIX, entry.text, entry.category))
        .collect()
}

fn repetition_prefix(text: &str) -> String {
    text.chars().take(REPETITION_PREFIX_CHARS).collect()
}

/// Catalog entries not recently shown, or the whole catalog if all were
pub fn affirmation_candidates(tracker: &RepetitionTracker) -> Vec<&'static AffirmationEntry> {
    let fresh: Vec<&'static AffirmationEntry> = AFFIRMATIONS
        .iter()
        .filter(|entry| !tracker.contains_fragment(&repetition_prefix(entry.text)))
        .collect();

    if fresh.is_empty() {
        AFFIRMATIONS.iter().collect()
    } else {
        fresh
    }
}

/// Random curated affirmation avoiding recent texts; records the choice
pub fn fallback_affirmation(tracker: &RepetitionTracker) -> Affirmation {
    fallback_affirmation_with_rng(tracker, &mut rand::thread_rng())
}

pub fn fallback_affirmation_with_rng<R: Rng + ?Sized>(
    tracker: &RepetitionTracker,
    rng: &mut R,
) -> Affirmation {
    let candidates = affirmation_candidates(tracker);
    // Candidates are never empty: the catalog itself is the floor
    let entry = candidates
        .choose(rng)
        .copied()
        .unwrap_or(&AFFIRMATIONS[0]);

    let affirmation = Affirmation {
        text: entry.text.to_string(),
        kind: entry.kind,
        author: entry.author.map(str::to_string),
    };

    tracker.record(affirmation.text.clone());
    affirmation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_chat_fallback_by_failure() {
        let limited = GenerationFailure::Transport(TransportError::RateLimited { attempts: 4 });
        assert_eq!(fallback_chat_text_for(&limited), CHAT_CONNECTION_FALLBACK);

        let refused = GenerationFailure::Transport(TransportError::UpstreamServerError {
            status: 503,
            body: String::new(),
        });
        assert_eq!(fallback_chat_text_for(&refused), CHAT_CONNECTION_FALLBACK);

        let network =
            GenerationFailure::Transport(TransportError::NetworkFailure("reset".to_string()));
        assert_eq!(fallback_chat_text_for(&network), CHAT_FALLBACK);

        let no_candidates = GenerationFailure::Parse(ParseError::NoCandidates);
        assert_eq!(fallback_chat_text_for(&no_candidates), CHAT_LISTENING_FALLBACK);

        let empty = GenerationFailure::Parse(ParseError::EmptyText);
        assert_eq!(fallback_chat_text_for(&empty), CHAT_FALLBACK);

        let json = GenerationFailure::Parse(ParseError::InvalidJson("x".to_string()));
        assert_eq!(fallback_chat_text_for(&json), fallback_chat_text());
    }

    #[test]
    fn test_quick_wins_are_distinct_and_fresh() {
        let wins = fallback_quick_wins(5);

        assert_eq!(wins.len(), 5);
        let ids: HashSet<&str> = wins.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
        let texts: HashSet<&str> = wins.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts.len(), 5);
        assert!(wins.iter().all(|w| !w.completed));
        assert!(wins.iter().all(|w| w.id.starts_with("fallback-")));
        assert!(wins.iter().all(|w| Category::ALL.contains(&w.category)));
    }

    #[test]
    fn test_quick_wins_capped_at_catalog_size() {
        let wins = fallback_quick_wins(100);
        assert_eq!(wins.len(), QUICK_WINS.len());

        let texts: HashSet<&str> = wins.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts.len(), QUICK_WINS.len());
    }

    #[test]
    fn test_quick_wins_selection_varies() {
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);

        let a: Vec<String> = fallback_quick_wins_with_rng(5, &mut rng_a)
            .into_iter()
            .map(|w| w.text)
            .collect();
        let b: Vec<String> = fallback_quick_wins_with_rng(5, &mut rng_b)
            .into_iter()
            .map(|w| w.text)
            .collect();

        assert_ne!(a, b);
    }

    #[test]
    fn test_affirmation_is_recorded() {
        let tracker = RepetitionTracker::new();

        let affirmation = fallback_affirmation(&tracker);

        assert_eq!(tracker.recent_texts(), vec![affirmation.text.clone()]);
        assert!(AFFIRMATIONS.iter().any(|a| a.text == affirmation.text));
    }

    #[test]
    fn test_recent_affirmations_are_filtered() {
        let tracker = RepetitionTracker::with_capacity(AFFIRMATIONS.len());
        for entry in &AFFIRMATIONS[1..] {
            tracker.record(entry.text);
        }

        let candidates = affirmation_candidates(&tracker);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, AFFIRMATIONS[0].text);
    }

    #[test]
    fn test_saturated_history_uses_full_catalog() {
        let tracker = RepetitionTracker::with_capacity(AFFIRMATIONS.len());
        for entry in AFFIRMATIONS {
            tracker.record(entry.text);
        }

        assert_eq!(affirmation_candidates(&tracker).len(), AFFIRMATIONS.len());
        let affirmation = fallback_affirmation(&tracker);
        assert!(!affirmation.text.is_empty());
    }

    #[test]
    fn test_consecutive_affirmations_do_not_repeat_within_history() {
        let tracker = RepetitionTracker::new();
        let mut seen = HashSet::new();

        for _ in 0..10 {
            let affirmation = fallback_affirmation(&tracker);
            assert!(seen.insert(affirmation.text), "affirmation repeated");
        }
    }
}
