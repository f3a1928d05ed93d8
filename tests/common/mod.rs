//! Shared helpers for integration tests

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use unburden::transport::{HttpTransport, RawResponse};
use unburden::upstream::GeminiClient;
use unburden::{ContentGenerator, RepetitionTracker, TransportError};

type Reply = Result<RawResponse, TransportError>;

/// Transport that replays scripted replies and records every payload
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<Reply>>>,
    repeat: Arc<Mutex<Option<Reply>>>,
    payloads: Arc<Mutex<Vec<Value>>>,
}

impl MockTransport {
    /// Every call gets `reply`
    pub fn always(reply: Reply) -> Self {
        let mock = Self::default();
        *mock.repeat.lock().unwrap() = Some(reply);
        mock
    }

    /// Calls get `replies` in order, then `fallback_reply` forever
    pub fn scripted(replies: Vec<Reply>, fallback_reply: Reply) -> Self {
        let mock = Self::always(fallback_reply);
        *mock.script.lock().unwrap() = replies.into();
        mock
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    pub fn last_payload(&self) -> Option<Value> {
        self.payloads.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post_json(&self, _url: &str, payload: &Value) -> Reply {
        self.payloads.lock().unwrap().push(payload.clone());

        if let Some(reply) = self.script.lock().unwrap().pop_front() {
            return reply;
        }
        self.repeat
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(TransportError::NetworkFailure("no script".to_string())))
    }
}

pub fn network_failure() -> Reply {
    Err(TransportError::NetworkFailure("connection refused".to_string()))
}

/// Successful envelope whose single candidate carries `text`
pub fn envelope(text: &str) -> Reply {
    let body = json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] } }
        ]
    });
    Ok(RawResponse::new(200, body.to_string()))
}

pub fn generator_with(transport: &MockTransport) -> ContentGenerator {
    let client = GeminiClient::with_transport(
        Arc::new(transport.clone()),
        "http://upstream.test/v1beta",
        "test-model",
        "test-key",
    )
    .unwrap();

    ContentGenerator::new(client, Arc::new(RepetitionTracker::new()))
}

/// Concatenated text of the last content turn in a payload
pub fn last_turn_text(payload: &Value) -> String {
    payload["contents"]
        .as_array()
        .and_then(|contents| contents.last())
        .and_then(|turn| turn["parts"][0]["text"].as_str())
        .unwrap_or_default()
        .to_string()
}
