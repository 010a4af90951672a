//! Validation tables
//!
//! The word lists and marker tables used by the validators are plain data.
//! [`ValidationConfig::default`] carries the built-in tables; callers can load
//! their own from JSON or TOML and hand the result to a validator
//! constructor. Numeric limits are not configurable and live in the crate
//! root.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Placeholder profanity list; real deployments inject their own
pub const DEFAULT_PROFANITY_WORDS: &[&str] = &["badword1", "badword2"];

/// Markers left behind by chat-model prompt formats
pub const DEFAULT_ARTIFACT_PATTERNS: &[&str] = &[
    r"\[INST\]",
    r"\[/INST\]",
    r"<\|.*?\|>",
    r"Human:",
    r"Assistant:",
    r"I'm an AI",
    r"As an AI",
];

/// File extensions that mark a URL as pointing at an image
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] =
    &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp", ".svg"];

/// Hosting domains whose URLs are assumed to serve images
pub const DEFAULT_IMAGE_HOSTS: &[&str] =
    &["imgur.com", "flickr.com", "amazonaws.com", "cloudinary.com"];

/// Tables consulted by the record validator and the content screener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Words whose presence raises a profanity warning (case-insensitive substring)
    pub profanity_words: Vec<String>,
    /// Regex sources for AI-artifact markers, matched case-insensitively
    pub artifact_patterns: Vec<String>,
    /// Extensions accepted as image-looking
    pub image_extensions: Vec<String>,
    /// Host substrings accepted as image-looking
    pub image_hosts: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            profanity_words: owned(DEFAULT_PROFANITY_WORDS),
            artifact_patterns: owned(DEFAULT_ARTIFACT_PATTERNS),
            image_extensions: owned(DEFAULT_IMAGE_EXTENSIONS),
            image_hosts: owned(DEFAULT_IMAGE_HOSTS),
        }
    }
}

impl ValidationConfig {
    /// Parse a JSON document; missing keys keep their defaults
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Replace the profanity list
    pub fn with_profanity_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profanity_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the AI-artifact marker list
    pub fn with_artifact_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artifact_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }
}
