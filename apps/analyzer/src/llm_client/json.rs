//! Tolerant JSON extraction from free-text model output.
//!
//! Models are told to return bare JSON but do not always comply. Three forms are accepted,
//! tried in order: the whole text, the first fenced code block, the first balanced
//! `{...}` object embedded in prose.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JsonExtractError {
    #[error("response text is empty")]
    Empty,

    #[error("no JSON object found in response")]
    NotFound,
}

pub fn extract_json(text: &str) -> Result<Value, JsonExtractError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(JsonExtractError::Empty);
    }

    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }

    if let Some(value) = fenced_block(text).and_then(|b| serde_json::from_str(b).ok()) {
        return Ok(value);
    }

    first_balanced_object(text)
        .and_then(|o| serde_json::from_str(o).ok())
        .ok_or(JsonExtractError::NotFound)
}

/// Body of the first ``` fence, with an optional language tag on the opening line.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after_open = &text[start + 3..];
    // skip the info string ("json", "JSON", ...) up to the end of the line
    let body_start = after_open.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after_open[body_start..];
    let end = body.find("```")?;
    Some(body[..end].trim())
}

/// First `{...}` span whose braces balance, ignoring braces inside JSON strings.
fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }
    None
}
