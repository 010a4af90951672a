//! Generated content screening
//!
//! AI responses are screened before they are shown to a user. Only a text
//! that is too short is rejected; prompt-format artifacts, repetition and
//! excessive length are reported as warnings.

use crate::config::ValidationConfig;
use crate::errors::{ConfigError, ValidationError};
use crate::report::{ReportBuilder, ValidationResult};
use crate::validators::char_len;
use crate::{
    MAX_GENERATED_CHARS, MIN_GENERATED_CHARS, REPETITION_MIN_SENTENCES, REPETITION_UNIQUE_RATIO,
};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

/// Screener for AI-generated text
#[derive(Debug, Clone)]
pub struct ContentScreener {
    artifacts: Vec<Regex>,
}

impl ContentScreener {
    /// Compile the artifact markers from a configuration
    pub fn new(config: &ValidationConfig) -> Result<Self, ConfigError> {
        let artifacts = config
            .artifact_patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| ConfigError::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { artifacts })
    }

    /// Sources of the artifact markers found in the text
    pub fn artifact_markers<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.artifacts
            .iter()
            .filter(|re| re.is_match(text))
            .map(Regex::as_str)
            .collect()
    }

    /// Returns true if the text repeats itself
    ///
    /// Sentences are split on `.`, `!` and `?`. With more than three
    /// sentences, fewer than 70% distinct ones (case-insensitive, trimmed)
    /// counts as repetitive.
    pub fn is_repetitive(&self, text: &str) -> bool {
        let sentences: Vec<&str> = text
            .split(|c: char| matches!(c, '.' | '!' | '?'))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.len() <= REPETITION_MIN_SENTENCES {
            return false;
        }

        let unique: HashSet<String> = sentences.iter().map(|s| s.to_lowercase()).collect();
        (unique.len() as f64 / sentences.len() as f64) < REPETITION_UNIQUE_RATIO
    }

    pub fn screen(&self, text: &str) -> ValidationResult {
        let mut report = ReportBuilder::new();

        let markers = self.artifact_markers(text);
        if !markers.is_empty() {
            log::debug!("generated content matched artifact markers: {:?}", markers);
            report.push(ValidationError::quality(
                "Content may contain AI generation artifacts",
            ));
        }

        if self.is_repetitive(text) {
            report.push(ValidationError::quality("Content may be repetitive"));
        }

        let len = char_len(text.trim());
        if len < MIN_GENERATED_CHARS {
            report.push(ValidationError::bound("Generated content too short"));
        }
        if len > MAX_GENERATED_CHARS {
            report.push(ValidationError::quality("Generated content may be too long"));
        }

        let result = report.finish();
        if !result.is_valid() {
            log::debug!("generated content rejected: {} characters", len);
        }
        result
    }
}

lazy_static! {
    static ref DEFAULT_SCREENER: ContentScreener =
        ContentScreener::new(&ValidationConfig::default()).unwrap();
}

/// Screen AI output with the built-in marker table
pub fn validate_generated_content(text: &str) -> ValidationResult {
    DEFAULT_SCREENER.screen(text)
}
