//! Structured (JSON) content parsing
//!
//! Model output is untrusted. The text may be wrapped in markdown code
//! fences or surrounded by prose, so parsing runs in two steps:
//! 1. Strip fences and try the whole text as JSON
//! 2. Otherwise take the first bracket-balanced array/object that
//!    parses, skipping stray braces in the surrounding prose
//!
//! `text` is always required. Missing or unknown `category`/`type`
//! values come back as `None` and the caller applies its defaults.

use crate::errors::ParseError;
use crate::types::{AffirmationKind, Category};
use serde_json::Value;

/// Quick win as proposed by the model, before ids are assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickWinDraft {
    pub text: String,
    pub category: Option<Category>,
}

/// Affirmation as proposed by the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffirmationDraft {
    pub text: String,
    pub kind: Option<AffirmationKind>,
    pub author: Option<String>,
}

/// Remove a surrounding markdown code fence (with optional language tag)
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```") {
        // Drop the language tag line, e.g. "json"
        body = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
        };
    }

    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }

    body.trim()
}

/// Locate the first complete, valid JSON array or object inside `text`
///
/// Every `{` or `[` is a candidate start, tried in order. A candidate whose
/// brackets do not balance, or whose balanced slice is not valid JSON, is
/// skipped and the scan resumes at the next opening bracket. Brackets
/// inside string literals are ignored.
pub fn find_embedded_json(text: &str) -> Option<&str> {
    embedded_json(text).map(|(slice, _)| slice)
}

fn embedded_json(text: &str) -> Option<(&str, Value)> {
    text.bytes()
        .enumerate()
        .filter(|&(_, byte)| byte == b'{' || byte == b'[')
        .filter_map(|(start, _)| balanced_end(text, start).map(|end| &text[start..=end]))
        .find_map(|candidate| {
            serde_json::from_str::<Value>(candidate)
                .ok()
                .map(|value| (candidate, value))
        })
}

/// Index of the bracket closing the one at `start`, if the nesting balances
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut stack: Vec<u8> = Vec::new();
    let mut in_string = false;
    let mut escape_next = false;

    for (i, &byte) in text.as_bytes().iter().enumerate().skip(start) {
        if escape_next {
            escape_next = false;
            continue;
        }

        if in_string {
            match byte {
                b'\\' => escape_next = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => stack.push(byte),
            b'}' | b']' => {
                let expected = if byte == b'}' { b'{' } else { b'[' };
                if stack.pop() != Some(expected) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse model text into a JSON value, tolerating fences and prose
pub fn parse_json_payload(text: &str) -> Result<Value, ParseError> {
    let body = strip_code_fences(text);

    match serde_json::from_str::<Value>(body) {
        Ok(value) => Ok(value),
        Err(direct_err) => embedded_json(body)
            .map(|(_, value)| value)
            .ok_or_else(|| ParseError::InvalidJson(direct_err.to_string())),
    }
}

fn required_text(object: &Value) -> Result<String, ParseError> {
    object
        .get("text")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or(ParseError::SchemaMismatch { field: "text" })
}

fn optional_str<'a>(object: &'a Value, field: &str) -> Option<&'a str> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("null"))
}

/// Parse a JSON array of `{text, category}` objects
///
/// Any item without text fails the whole batch.
pub fn parse_quick_wins(text: &str) -> Result<Vec<QuickWinDraft>, ParseError> {
    let value = parse_json_payload(text)?;

    let items = value
        .as_array()
        .ok_or(ParseError::SchemaMismatch { field: "items" })?;

    if items.is_empty() {
        return Err(ParseError::SchemaMismatch { field: "items" });
    }

    items
        .iter()
        .map(|item| {
            Ok(QuickWinDraft {
                text: required_text(item)?,
                category: optional_str(item, "category").and_then(Category::from_model),
            })
        })
        .collect()
}

/// Parse a JSON object `{text, type, author}`
pub fn parse_affirmation(text: &str) -> Result<AffirmationDraft, ParseError> {
    let value = parse_json_payload(text)?;

    if !value.is_object() {
        return Err(ParseError::SchemaMismatch { field: "text" });
    }

    Ok(AffirmationDraft {
        text: required_text(&value)?,
        kind: optional_str(&value, "type").and_then(AffirmationKind::from_model),
        author: optional_str(&value, "author").map(str::to_string),
    })
}
