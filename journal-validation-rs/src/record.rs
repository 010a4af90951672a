//! Memory record validation
//!
//! A memory record is checked field by field. Every field is always
//! examined, so one call reports every problem with the record.
//!
//! Two entry points share the same field rules: [`RecordValidator::validate`]
//! for an already-typed [`MemoryRecord`], and
//! [`RecordValidator::validate_value`] for an untyped JSON document, which
//! first confirms each field has the expected shape and fails closed when it
//! does not.

use crate::config::ValidationConfig;
use crate::errors::{CheckResult, ValidationError};
use crate::report::{ReportBuilder, ValidationResult};
use crate::sanitizers::{sanitize, sanitize_tags};
use crate::validators::{
    char_len, is_image_url, is_valid_url, max_chars, not_empty, ProfanityCheck, WordList,
};
use crate::{MAX_CONTENT_CHARS, MAX_TAGS, MAX_TAG_CHARS, MAX_TITLE_CHARS};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The three accepted mood labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodLabel {
    Positive,
    Negative,
    Neutral,
}

impl MoodLabel {
    /// All labels, in display order
    pub const ALL: [MoodLabel; 3] = [MoodLabel::Positive, MoodLabel::Negative, MoodLabel::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Positive => "Positive",
            MoodLabel::Negative => "Negative",
            MoodLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodLabel {
    type Err = ValidationError;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| {
                ValidationError::format("Mood label must be one of: Positive, Negative, Neutral")
            })
    }
}

/// Mood attached to a record, as submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mood {
    pub label: String,
    pub score: f64,
}

impl Mood {
    pub fn new(label: MoodLabel, score: f64) -> Self {
        Self {
            label: label.as_str().to_string(),
            score,
        }
    }

    /// Parse the submitted label
    pub fn parsed_label(&self) -> CheckResult<MoodLabel> {
        self.label.parse()
    }
}

/// A memory as submitted by the journal front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryRecord {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl MemoryRecord {
    pub fn new<T: Into<String>, C: Into<String>>(title: T, content: C, mood: Mood) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            mood,
            image_url: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image_url<S: Into<String>>(mut self, url: S) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Copy with free-text fields sanitized and tags normalised for storage
    pub fn sanitized(&self) -> MemoryRecord {
        MemoryRecord {
            title: sanitize(&self.title),
            content: sanitize(&self.content),
            tags: sanitize_tags(&self.tags),
            mood: self.mood.clone(),
            image_url: self.image_url.clone().filter(|url| !url.is_empty()),
        }
    }
}

/// A record that passed validation, ready for persistence
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedMemory {
    /// Sanitized copy of the submitted record
    pub record: MemoryRecord,
    /// Non-blocking notices to surface to the user
    pub warnings: Vec<String>,
}

/// Field-level validator for memory records
pub struct RecordValidator {
    profanity: Box<dyn ProfanityCheck>,
    image_extensions: Vec<String>,
    image_hosts: Vec<String>,
}

impl RecordValidator {
    /// Build a validator from configuration tables
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            profanity: Box::new(WordList::from_config(config)),
            image_extensions: config.image_extensions.clone(),
            image_hosts: config.image_hosts.clone(),
        }
    }

    /// Replace the profanity check
    pub fn with_profanity_check<P: ProfanityCheck + 'static>(mut self, check: P) -> Self {
        self.profanity = Box::new(check);
        self
    }

    /// Validate a typed record
    pub fn validate(&self, record: &MemoryRecord) -> ValidationResult {
        let mut report = ReportBuilder::new();

        self.check_title(&record.title, &mut report);
        self.check_content(&record.content, &mut report);

        self.check_tag_count(record.tags.len(), &mut report);
        for (index, tag) in record.tags.iter().enumerate() {
            self.check_tag(index, tag, &mut report);
        }

        self.check_mood_label(&record.mood.label, &mut report);
        self.check_mood_score(record.mood.score, &mut report);

        if let Some(url) = record.image_url.as_deref().filter(|url| !url.is_empty()) {
            self.check_image_url(url, &mut report);
        }

        finish("memory record", report)
    }

    /// Validate an untyped JSON document of the record's shape
    pub fn validate_value(&self, value: &Value) -> ValidationResult {
        let mut report = ReportBuilder::new();

        match non_empty_str(value.get("title")) {
            Some(title) => self.check_title(title, &mut report),
            None => {
                report.push(ValidationError::structural("Title is required and must be a string"));
            }
        }

        match non_empty_str(value.get("content")) {
            Some(content) => self.check_content(content, &mut report),
            None => {
                report.push(ValidationError::structural(
                    "Content is required and must be a string",
                ));
            }
        }

        match value.get("tags") {
            Some(Value::Array(tags)) => {
                self.check_tag_count(tags.len(), &mut report);
                for (index, tag) in tags.iter().enumerate() {
                    match tag {
                        Value::String(tag) => self.check_tag(index, tag, &mut report),
                        _ => {
                            report.push(ValidationError::structural(format!(
                                "Tag at index {} must be a string",
                                index
                            )));
                        }
                    }
                }
            }
            _ => {
                report.push(ValidationError::structural("Tags must be an array"));
            }
        }

        match value.get("mood") {
            Some(Value::Object(mood)) => {
                match non_empty_str(mood.get("label")) {
                    Some(label) => self.check_mood_label(label, &mut report),
                    None => {
                        report.push(ValidationError::structural(
                            "Mood label is required and must be a string",
                        ));
                    }
                }
                match mood.get("score").and_then(Value::as_f64) {
                    Some(score) => self.check_mood_score(score, &mut report),
                    None => {
                        report.push(ValidationError::structural("Mood score must be a number"));
                    }
                }
            }
            _ => {
                report.push(ValidationError::structural("Mood is required and must be an object"));
            }
        }

        match value.get("imageUrl") {
            Some(url) if is_truthy(url) => match url {
                Value::String(url) => self.check_image_url(url, &mut report),
                _ => {
                    report.push(ValidationError::structural("Image URL must be a string"));
                }
            },
            _ => {}
        }

        finish("memory document", report)
    }

    fn check_title(&self, title: &str, report: &mut ReportBuilder) {
        if title.is_empty() {
            report.push(ValidationError::structural("Title is required and must be a string"));
            return;
        }

        let sanitized = sanitize(title);
        report.check(not_empty(&sanitized, "Title cannot be empty after sanitization").and_then(
            |_| max_chars(&sanitized, MAX_TITLE_CHARS, "Title must be 200 characters or less"),
        ));

        if self.profanity.contains_profanity(&sanitized) {
            report.push(ValidationError::quality("Title may contain inappropriate content"));
        }
    }

    fn check_content(&self, content: &str, report: &mut ReportBuilder) {
        if content.is_empty() {
            report.push(ValidationError::structural(
                "Content is required and must be a string",
            ));
            return;
        }

        let sanitized = sanitize(content);
        report.check(
            not_empty(&sanitized, "Content cannot be empty after sanitization").and_then(|_| {
                max_chars(&sanitized, MAX_CONTENT_CHARS, "Content must be 5000 characters or less")
            }),
        );

        if self.profanity.contains_profanity(&sanitized) {
            report.push(ValidationError::quality("Content may contain inappropriate language"));
        }
    }

    fn check_tag_count(&self, count: usize, report: &mut ReportBuilder) {
        if count > MAX_TAGS {
            report.push(ValidationError::bound("Maximum 20 tags allowed"));
        }
    }

    fn check_tag(&self, index: usize, tag: &str, report: &mut ReportBuilder) {
        let sanitized = sanitize(tag);
        let len = char_len(&sanitized);

        if len == 0 {
            report.push(ValidationError::quality(format!("Empty tag found at index {}", index)));
        } else if len > MAX_TAG_CHARS {
            report.push(ValidationError::bound(format!(
                "Tag at index {} must be 50 characters or less",
                index
            )));
        }
    }

    fn check_mood_label(&self, label: &str, report: &mut ReportBuilder) {
        if label.is_empty() {
            report.push(ValidationError::structural(
                "Mood label is required and must be a string",
            ));
            return;
        }
        report.check(label.parse::<MoodLabel>().map(|_| ()));
    }

    fn check_mood_score(&self, score: f64, report: &mut ReportBuilder) {
        // NaN fails the range check
        if !(0.0..=1.0).contains(&score) {
            report.push(ValidationError::bound("Mood score must be between 0 and 1"));
        }
    }

    fn check_image_url(&self, url: &str, report: &mut ReportBuilder) {
        if !is_valid_url(url) {
            report.push(ValidationError::format("Image URL must be a valid URL"));
        } else if !is_image_url(
            url,
            self.image_extensions.as_slice(),
            self.image_hosts.as_slice(),
        ) {
            report.push(ValidationError::quality(
                "Image URL does not appear to be an image file",
            ));
        }
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// `null`, `false`, `0` and `""` count as absent for optional fields
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn finish(subject: &str, report: ReportBuilder) -> ValidationResult {
    let result = report.finish();
    if !result.is_valid() {
        log::debug!(
            "{} rejected: {} errors, {} warnings",
            subject,
            result.errors().len(),
            result.warnings().len()
        );
    }
    result
}

lazy_static! {
    static ref DEFAULT_VALIDATOR: RecordValidator = RecordValidator::default();
}

/// Validate a record with the built-in tables
pub fn validate_memory_record(record: &MemoryRecord) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(record)
}

/// Validate an untyped JSON document with the built-in tables
pub fn validate_memory_value(value: &Value) -> ValidationResult {
    DEFAULT_VALIDATOR.validate_value(value)
}

/// Validate a submission and, if it passes, return the sanitized record
/// together with any warnings. A failing submission returns the full report.
pub fn prepare_memory(record: &MemoryRecord) -> Result<PreparedMemory, ValidationResult> {
    let report = validate_memory_record(record);
    if !report.is_valid() {
        return Err(report);
    }

    let (_, warnings) = report.into_parts();
    Ok(PreparedMemory {
        record: record.sanitized(),
        warnings,
    })
}
