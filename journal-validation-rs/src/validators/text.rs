//! Text validators
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use crate::config::ValidationConfig;
use crate::errors::{CheckResult, ValidationError};

/// Length of a string in characters
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validate that a string is not empty
pub fn not_empty(s: &str, message: &str) -> CheckResult<()> {
    if s.is_empty() {
        Err(ValidationError::bound(message))
    } else {
        Ok(())
    }
}

/// Validate that a string has at most `max` characters
pub fn max_chars(s: &str, max: usize, message: &str) -> CheckResult<()> {
    if char_len(s) > max {
        Err(ValidationError::bound(message))
    } else {
        Ok(())
    }
}

/// Pluggable profanity detection
pub trait ProfanityCheck: Send + Sync {
    /// Returns true if the text should raise a profanity warning
    fn contains_profanity(&self, text: &str) -> bool;
}

/// Case-insensitive substring match against a fixed word list
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a word list; empty entries are skipped
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                log::warn!("skipping empty entry in profanity word list");
                continue;
            }
            kept.push(word);
        }
        Self { words: kept }
    }

    /// Word list taken from a configuration
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(&config.profanity_words)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl ProfanityCheck for WordList {
    fn contains_profanity(&self, text: &str) -> bool {
        let lowercase = text.to_lowercase();
        self.words.iter().any(|word| lowercase.contains(word.as_str()))
    }
}
