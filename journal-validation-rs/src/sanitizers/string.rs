//! String sanitization utilities
//!
//! Whitespace normalisation and tag clean-up.

use super::{sanitize, SanitizeResult};
use crate::{MAX_TAGS, MAX_TAG_CHARS};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Trim leading and trailing whitespace
pub fn trim_whitespace(input: &str) -> SanitizeResult<String> {
    let trimmed = input.trim();

    if trimmed.len() == input.len() {
        SanitizeResult::unmodified(input.to_string())
    } else {
        SanitizeResult::modified(
            trimmed.to_string(),
            Some("Trimmed surrounding whitespace".to_string()),
        )
    }
}

/// Collapse every whitespace run into a single space
pub fn collapse_whitespace(input: &str) -> SanitizeResult<String> {
    let result = WHITESPACE_RUN_REGEX.replace_all(input, " ");

    if result == input {
        SanitizeResult::unmodified(input.to_string())
    } else {
        SanitizeResult::modified(result.into_owned(), Some("Collapsed whitespace".to_string()))
    }
}

/// Normalise a tag list for storage.
///
/// Each tag is sanitized, kept only if it is 1 to 50 characters long,
/// lower-cased and reduced to `[a-z0-9_-]`. Empty results are dropped and at
/// most 20 tags are returned.
pub fn sanitize_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    tags.iter()
        .map(|tag| sanitize(tag.as_ref()))
        .filter(|tag| {
            let len = tag.chars().count();
            len > 0 && len <= MAX_TAG_CHARS
        })
        .map(|tag| {
            tag.to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|tag| !tag.is_empty())
        .take(MAX_TAGS)
        .collect()
}
