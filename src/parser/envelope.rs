//! Text extraction from the upstream reply envelope

use crate::errors::ParseError;
use crate::upstream::GenerateContentResponse;

/// Text of the first candidate, trimmed
///
/// A candidate without content (for example one stopped by a safety
/// filter) counts as no candidate at all.
pub fn extract_text(envelope: &GenerateContentResponse) -> Result<String, ParseError> {
    let content = envelope
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .filter(|content| content.parts.iter().any(|part| part.text.is_some()))
        .ok_or(ParseError::NoCandidates)?;

    let text: String = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyText);
    }

    Ok(trimmed.to_string())
}
