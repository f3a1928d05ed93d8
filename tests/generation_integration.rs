//! Integration tests for the generation facade
//!
//! Runs every mode against a scripted transport, so no network is needed.

mod common;

use common::{envelope, generator_with, last_turn_text, network_failure, MockTransport};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use unburden::fallback::catalog::{
    AFFIRMATIONS, CHAT_CONNECTION_FALLBACK, CHAT_FALLBACK, CHAT_LISTENING_FALLBACK,
    MOOD_BETTER_FALLBACK, MOOD_REFLECT_FALLBACK, QUICK_WINS,
};
use unburden::transport::{RawResponse, RetryPolicy, RetryTransport};
use unburden::upstream::GeminiClient;
use unburden::{
    AffirmationKind, Category, ContentGenerator, ContentSource, ConversationTurn,
    GenerationRequest, GenerationResult, MoodAction, RepetitionTracker, TimeOfDay,
    ValidationError,
};

#[tokio::test]
async fn test_chat_reply_from_upstream() {
    let transport = MockTransport::always(envelope("  That sounds really heavy. I'm here.  "));
    let generator = generator_with(&transport);
    let history = vec![
        ConversationTurn::user("I had a rough day"),
        ConversationTurn::companion("I'm sorry to hear that. Want to talk about it?"),
    ];

    let reply = generator
        .generate_chat_reply("Work was overwhelming", &history)
        .await
        .unwrap();

    assert_eq!(reply.source, ContentSource::Upstream);
    assert_eq!(reply.content, "That sounds really heavy. I'm here.");

    let payload = transport.last_payload().unwrap();
    let contents = payload["contents"].as_array().unwrap();
    // Persona, two history turns, the new message
    assert_eq!(contents.len(), 4);
    assert_eq!(contents[0]["role"], "model");
    assert_eq!(last_turn_text(&payload), "Work was overwhelming");
    assert_eq!(payload["generationConfig"]["maxOutputTokens"], 1024);
    assert_eq!(payload["safetySettings"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_chat_falls_back_when_upstream_unreachable() {
    let transport = MockTransport::always(network_failure());
    let generator = generator_with(&transport);

    let reply = generator.generate_chat_reply("hello", &[]).await.unwrap();

    assert!(reply.is_fallback());
    assert!(!reply.content.trim().is_empty());
    assert_eq!(reply.content, CHAT_FALLBACK);
}

#[tokio::test]
async fn test_chat_falls_back_on_empty_candidates() {
    let transport =
        MockTransport::always(Ok(RawResponse::new(200, r#"{"candidates":[]}"#)));
    let generator = generator_with(&transport);

    let reply = generator.generate_chat_reply("hello", &[]).await.unwrap();

    assert!(reply.is_fallback());
    assert_eq!(reply.content, CHAT_LISTENING_FALLBACK);
}

#[tokio::test]
async fn test_chat_falls_back_on_blank_reply_text() {
    let transport = MockTransport::always(envelope("   "));
    let generator = generator_with(&transport);

    let reply = generator.generate_chat_reply("hello", &[]).await.unwrap();

    assert!(reply.is_fallback());
    assert_eq!(reply.content, CHAT_FALLBACK);
}

#[tokio::test]
async fn test_chat_falls_back_on_server_error() {
    let transport = MockTransport::always(Ok(RawResponse::new(503, "unavailable")));
    let generator = generator_with(&transport);

    let reply = generator.generate_chat_reply("hello", &[]).await.unwrap();

    assert!(reply.is_fallback());
    assert_eq!(reply.content, CHAT_CONNECTION_FALLBACK);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_blank_chat_message_is_rejected_without_network() {
    let transport = MockTransport::always(envelope("unused"));
    let generator = generator_with(&transport);

    for message in ["", "   ", "\n\t "] {
        let err = generator.generate_chat_reply(message, &[]).await.unwrap_err();
        assert_eq!(err, ValidationError::EmptyMessage);
    }

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_mood_fallback_texts_are_exact() {
    let transport = MockTransport::always(network_failure());
    let generator = generator_with(&transport);

    let better = generator.generate_mood_response(MoodAction::Better, &[]).await;
    assert!(better.is_fallback());
    assert_eq!(better.content, MOOD_BETTER_FALLBACK);

    let reflect = generator.generate_mood_response(MoodAction::Reflect, &[]).await;
    assert_eq!(reflect.content, MOOD_REFLECT_FALLBACK);
}

#[tokio::test]
async fn test_mood_request_ends_with_instruction() {
    let transport = MockTransport::always(envelope("Here's a gentle thought."));
    let generator = generator_with(&transport);
    let history = vec![ConversationTurn::user("I feel stuck")];

    let reply = generator
        .generate_mood_response(MoodAction::Distract, &history)
        .await;

    assert_eq!(reply.source, ContentSource::Upstream);
    let payload = transport.last_payload().unwrap();
    assert_eq!(payload["contents"].as_array().unwrap().len(), 3);
    assert_eq!(payload["generationConfig"]["maxOutputTokens"], 512);
    assert!(payload.get("safetySettings").is_none());
}

#[tokio::test]
async fn test_quick_wins_fallback_batch() {
    let transport = MockTransport::always(network_failure());
    let generator = generator_with(&transport);

    let wins = generator
        .generate_quick_wins(5, TimeOfDay::Morning)
        .await
        .unwrap();

    assert!(wins.is_fallback());
    assert_eq!(wins.content.len(), 5);

    let texts: HashSet<&str> = wins.content.iter().map(|w| w.text.as_str()).collect();
    assert_eq!(texts.len(), 5);
    assert!(texts
        .iter()
        .all(|text| QUICK_WINS.iter().any(|entry| entry.text == *text)));

    let ids: HashSet<&str> = wins.content.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids.len(), 5);
    assert!(wins.content.iter().all(|w| !w.completed));
}

#[tokio::test]
async fn test_quick_wins_from_fenced_json() {
    let reply = r#"Sure! Here you go:
```json
[
  {"text": "Drink a glass of water", "category": "physical"},
  {"text": "Text a friend hello", "category": "social"},
  {"text": "Doodle for five minutes", "category": "sketching"}
]
```"#;
    let transport = MockTransport::always(envelope(reply));
    let generator = generator_with(&transport);

    let wins = generator
        .generate_quick_wins(3, TimeOfDay::Evening)
        .await
        .unwrap();

    assert_eq!(wins.source, ContentSource::Upstream);
    assert_eq!(wins.content.len(), 3);
    assert_eq!(wins.content[0].text, "Drink a glass of water");
    assert_eq!(wins.content[1].category, Category::Social);
    // Unknown category defaults
    assert_eq!(wins.content[2].category, Category::Mental);
    assert!(wins.content.iter().all(|w| w.id.starts_with("ai-") && !w.completed));

    let payload = transport.last_payload().unwrap();
    assert_eq!(payload["contents"].as_array().unwrap().len(), 1);
    assert!(last_turn_text(&payload).contains("evening"));
}

#[tokio::test]
async fn test_quick_wins_prose_reply_falls_back() {
    let transport = MockTransport::always(envelope("I'd suggest going for a walk!"));
    let generator = generator_with(&transport);

    let wins = generator
        .generate_quick_wins(3, TimeOfDay::Afternoon)
        .await
        .unwrap();

    assert!(wins.is_fallback());
    assert_eq!(wins.content.len(), 3);
    assert!(wins.content.iter().all(|w| w.id.starts_with("fallback-")));
}

#[tokio::test]
async fn test_zero_quick_wins_is_rejected_without_network() {
    let transport = MockTransport::always(envelope("[]"));
    let generator = generator_with(&transport);

    let err = generator
        .generate_quick_wins(0, TimeOfDay::Morning)
        .await
        .unwrap_err();

    assert_eq!(err, ValidationError::NonPositiveCount);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_personalized_quick_wins() {
    let reply = r#"[
        {"text": "Step outside for fresh air", "category": "mindful"},
        {"text": "Stretch your shoulders", "category": "physical"},
        {"text": "Write one kind sentence to yourself", "category": "creative"},
        {"text": "One too many", "category": "mental"}
    ]"#;
    let transport = MockTransport::always(envelope(reply));
    let generator = generator_with(&transport);
    let done = vec!["Drink water".to_string()];

    let wins = generator
        .generate_personalized_quick_wins("anxious and tired", &done)
        .await
        .unwrap();

    assert_eq!(wins.source, ContentSource::Upstream);
    assert_eq!(wins.content.len(), 3);
    assert!(wins.content.iter().all(|w| w.id.starts_with("mood-")));

    let prompt = last_turn_text(&transport.last_payload().unwrap());
    assert!(prompt.contains("anxious and tired"));
    assert!(prompt.contains("Drink water"));
}

#[tokio::test]
async fn test_personalized_quick_wins_validation_and_fallback() {
    let transport = MockTransport::always(network_failure());
    let generator = generator_with(&transport);

    let err = generator
        .generate_personalized_quick_wins("  ", &[])
        .await
        .unwrap_err();
    assert_eq!(err, ValidationError::EmptyMood);
    assert_eq!(transport.calls(), 0);

    let wins = generator
        .generate_personalized_quick_wins("sad", &[])
        .await
        .unwrap();
    assert!(wins.is_fallback());
    assert_eq!(wins.content.len(), 3);
    assert!(wins.content.iter().all(|w| w.id.starts_with("fallback-")));
}

#[tokio::test]
async fn test_affirmation_from_upstream_is_recorded() {
    let reply = r#"{"text": "The oak fought the wind and grew strong.", "type": "proverb", "author": "null"}"#;
    let transport = MockTransport::always(envelope(reply));
    let generator = generator_with(&transport);

    let first = generator.generate_affirmation(false).await;

    assert_eq!(first.source, ContentSource::Upstream);
    assert_eq!(first.content.kind, AffirmationKind::Proverb);
    assert_eq!(first.content.author, None);
    assert_eq!(
        generator.tracker().recent_texts(),
        vec!["The oak fought the wind and grew strong.".to_string()]
    );

    let first_prompt = last_turn_text(&transport.last_payload().unwrap());
    assert!(!first_prompt.contains("IMPORTANT: Avoid"));

    generator.generate_affirmation(true).await;
    let second_prompt = last_turn_text(&transport.last_payload().unwrap());
    assert!(second_prompt.contains("IMPORTANT: Avoid"));
    assert!(second_prompt.contains("The oak fought the wind"));
}

#[tokio::test]
async fn test_affirmation_missing_text_falls_back() {
    let transport = MockTransport::always(envelope(r#"{"type": "quote"}"#));
    let generator = generator_with(&transport);

    let affirmation = generator.generate_affirmation(false).await;

    assert!(affirmation.is_fallback());
    assert!(AFFIRMATIONS
        .iter()
        .any(|entry| entry.text == affirmation.content.text));
    assert_eq!(generator.tracker().len(), 1);
}

#[tokio::test]
async fn test_repeated_fallback_affirmations_stay_bounded_and_fresh() {
    let transport = MockTransport::always(network_failure());
    let generator = generator_with(&transport);

    let mut texts = Vec::new();
    for _ in 0..11 {
        let affirmation = generator.generate_affirmation(false).await;
        assert!(affirmation.is_fallback());
        texts.push(affirmation.content.text);
    }

    assert!(generator.tracker().len() <= 10);

    // No repeats within any window the history covers
    for window in texts.windows(10) {
        let unique: HashSet<&String> = window.iter().collect();
        assert_eq!(unique.len(), window.len());
    }
}

#[tokio::test]
async fn test_generate_dispatches_tagged_requests() {
    let transport = MockTransport::always(network_failure());
    let generator = generator_with(&transport);

    let request: GenerationRequest = serde_json::from_str(
        r#"{"mode": "mood_action", "action": "better", "history": []}"#,
    )
    .unwrap();
    let result = generator.generate(&request).await.unwrap();
    assert_eq!(result.as_text(), Some(MOOD_BETTER_FALLBACK));
    assert!(result.is_fallback());

    let request: GenerationRequest =
        serde_json::from_str(r#"{"mode": "quick_wins", "count": 2}"#).unwrap();
    match generator.generate(&request).await.unwrap() {
        GenerationResult::QuickWins(wins) => assert_eq!(wins.content.len(), 2),
        other => panic!("unexpected result: {:?}", other),
    }

    let request = GenerationRequest::Chat {
        current_message: " ".to_string(),
        history: Vec::new(),
    };
    assert_eq!(
        generator.generate(&request).await.unwrap_err(),
        ValidationError::EmptyMessage
    );
}

#[test]
fn test_unknown_mood_action_is_rejected_at_the_boundary() {
    let parsed = serde_json::from_str::<GenerationRequest>(
        r#"{"mode": "mood_action", "action": "sad"}"#,
    );
    assert!(parsed.is_err());
    assert!("sad".parse::<MoodAction>().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_rate_limited_calls_are_retried_with_backoff() {
    let inner = MockTransport::scripted(
        vec![
            Ok(RawResponse::new(429, "slow down")),
            Ok(RawResponse::new(429, "slow down")),
        ],
        envelope("I'm glad you reached out."),
    );
    let client = GeminiClient::with_transport(
        Arc::new(RetryTransport::new(inner.clone(), RetryPolicy::new())),
        "http://upstream.test/v1beta",
        "test-model",
        "test-key",
    )
    .unwrap();
    let generator = ContentGenerator::new(client, Arc::new(RepetitionTracker::new()));

    let start = tokio::time::Instant::now();
    let reply = generator.generate_chat_reply("hi", &[]).await.unwrap();

    assert_eq!(reply.source, ContentSource::Upstream);
    assert_eq!(inner.calls(), 3);
    assert!(start.elapsed() >= Duration::from_millis(3000));
}

/// Transport whose request never completes
struct HangingTransport;

#[async_trait::async_trait]
impl unburden::transport::HttpTransport for HangingTransport {
    async fn post_json(
        &self,
        _url: &str,
        _payload: &serde_json::Value,
    ) -> Result<RawResponse, unburden::TransportError> {
        std::future::pending().await
    }
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_affirmation_commits_nothing() {
    let client = GeminiClient::with_transport(
        Arc::new(HangingTransport),
        "http://upstream.test/v1beta",
        "test-model",
        "test-key",
    )
    .unwrap();
    let generator = ContentGenerator::new(client, Arc::new(RepetitionTracker::new()));

    let outcome = tokio::time::timeout(
        Duration::from_millis(50),
        generator.generate_affirmation(false),
    )
    .await;

    assert!(outcome.is_err(), "request should still be pending");
    assert_eq!(generator.tracker().len(), 0);
}

#[tokio::test]
async fn test_concurrent_affirmations_are_all_recorded() {
    let transport = MockTransport::always(network_failure());
    let generator = generator_with(&transport);

    let (a, b, c, d) = tokio::join!(
        generator.generate_affirmation(false),
        generator.generate_affirmation(true),
        generator.generate_affirmation(false),
        generator.generate_affirmation(true),
    );

    assert!([&a, &b, &c, &d].iter().all(|r| r.is_fallback()));
    assert_eq!(generator.tracker().len(), 4);
    assert_eq!(transport.calls(), 4);
}

#[tokio::test]
async fn test_concurrent_affirmations_respect_history_bound() {
    let transport = MockTransport::always(network_failure());
    let generator = generator_with(&transport);

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..12 {
        let generator = generator.clone();
        tasks.spawn(async move { generator.generate_affirmation(i % 2 == 0).await });
    }
    while let Some(joined) = tasks.join_next().await {
        assert!(!joined.unwrap().content.text.is_empty());
    }

    assert_eq!(generator.tracker().len(), 10);
    assert_eq!(transport.calls(), 12);
}
