//! Input sanitization utilities
//!
//! This module cleans freeform text before it is stored or echoed back.
//! [`sanitize`] runs the markup passes from [`html`] followed by the
//! whitespace passes from [`string`], and repeats the whole pipeline until the
//! text stops changing, so a removal can never leave behind a pattern that an
//! earlier pass would have caught.

pub mod html;
pub mod string;

pub use html::*;
pub use string::*;

use serde_json::Value;

/// Sanitization result containing the sanitized content and information
/// about whether changes were made during sanitization
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizeResult<T> {
    /// Sanitized content
    pub sanitized: T,
    /// Whether any changes were made during sanitization
    pub was_modified: bool,
    /// Optional details about what was modified
    pub details: Option<String>,
}

impl<T> SanitizeResult<T> {
    /// Create a new sanitization result
    pub fn new(sanitized: T, was_modified: bool, details: Option<String>) -> Self {
        Self {
            sanitized,
            was_modified,
            details,
        }
    }

    /// Create a result with unmodified content
    pub fn unmodified(content: T) -> Self {
        Self::new(content, false, None)
    }

    /// Create a result with modified content
    pub fn modified(content: T, details: Option<String>) -> Self {
        Self::new(content, true, details)
    }
}

/// A single text pass
pub type Pass = fn(&str) -> SanitizeResult<String>;

/// Pass order for [`sanitize`]. Script blocks go before the generic tag
/// pass, otherwise the tag pass eats `<script>` and `</script>` and leaves
/// the script body behind.
pub const SANITIZE_PASSES: &[Pass] = &[
    remove_script_blocks,
    strip_html_tags,
    remove_javascript_uris,
    remove_event_handlers,
    remove_data_uris,
    trim_whitespace,
    collapse_whitespace,
];

/// Run multiple sanitizers in sequence
pub fn chain_sanitizers(input: &str, sanitizers: &[Pass]) -> SanitizeResult<String> {
    let mut result = SanitizeResult::unmodified(input.to_string());
    let mut all_details = Vec::new();

    for sanitizer in sanitizers {
        let current = sanitizer(&result.sanitized);

        if current.was_modified {
            result.sanitized = current.sanitized;
            result.was_modified = true;
            if let Some(details) = current.details {
                all_details.push(details);
            }
        }
    }

    if !all_details.is_empty() {
        result.details = Some(all_details.join("; "));
    }

    result
}

/// Sanitize text and report which passes changed it
pub fn sanitize_detailed(input: &str) -> SanitizeResult<String> {
    let mut text = input.to_string();
    let mut applied: Vec<String> = Vec::new();

    loop {
        let round = chain_sanitizers(&text, SANITIZE_PASSES);
        if !round.was_modified {
            break;
        }
        if let Some(details) = round.details {
            for part in details.split("; ") {
                if !applied.iter().any(|seen| seen == part) {
                    applied.push(part.to_string());
                }
            }
        }
        text = round.sanitized;
    }

    if applied.is_empty() {
        SanitizeResult::unmodified(text)
    } else {
        let details = applied.join("; ");
        log::debug!("sanitizer modified input: {}", details);
        SanitizeResult::modified(text, Some(details))
    }
}

/// Strip markup, script and URI-scheme patterns and normalise whitespace
pub fn sanitize(input: &str) -> String {
    sanitize_detailed(input).sanitized
}

/// Absent input sanitizes to the empty string
pub fn sanitize_opt(input: Option<&str>) -> String {
    input.map(sanitize).unwrap_or_default()
}

/// Non-string JSON values sanitize to the empty string
pub fn sanitize_value(input: &Value) -> String {
    match input {
        Value::String(s) => sanitize(s),
        _ => String::new(),
    }
}
