//! Upload validation
//!
//! Checks the metadata of a photo upload before the bytes are accepted.
//! All checks run on every call and this validator never produces warnings.

use crate::errors::ValidationError;
use crate::report::{ReportBuilder, ValidationResult};
use crate::validators::{max_chars, safe_filename};
use crate::{MAX_FILENAME_CHARS, MAX_UPLOAD_BYTES};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// MIME types accepted for photo uploads
pub const ALLOWED_MIME_TYPES: &[&str] =
    &["image/jpeg", "image/jpg", "image/png", "image/gif", "image/webp"];

/// Metadata describing a submitted file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDescriptor {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl UploadDescriptor {
    pub fn new<N: Into<String>, M: Into<String>>(name: N, size_bytes: u64, mime_type: M) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// Upload validator with fixed limits
#[derive(Debug, Clone)]
pub struct UploadValidator {
    max_bytes: u64,
    allowed_types: Vec<String>,
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self {
            max_bytes: MAX_UPLOAD_BYTES,
            allowed_types: ALLOWED_MIME_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl UploadValidator {
    /// Returns true if the MIME type is on the allow-list (exact match)
    pub fn is_allowed_type(&self, mime_type: &str) -> bool {
        self.allowed_types.iter().any(|allowed| allowed == mime_type)
    }

    pub fn validate(&self, file: &UploadDescriptor) -> ValidationResult {
        let mut report = ReportBuilder::new();

        if file.size_bytes > self.max_bytes {
            report.push(ValidationError::bound("File size must be less than 5MB"));
        }

        if !self.is_allowed_type(&file.mime_type) {
            report.push(ValidationError::format(
                "Only JPEG, PNG, GIF, and WebP images are allowed",
            ));
        }

        report.check(max_chars(
            &file.name,
            MAX_FILENAME_CHARS,
            "Filename must be less than 255 characters",
        ));
        report.check(safe_filename(&file.name));

        let result = report.finish();
        if !result.is_valid() {
            log::debug!(
                "upload of {} bytes ({}) rejected: {} errors",
                file.size_bytes,
                file.mime_type,
                result.errors().len()
            );
        }
        result
    }
}

lazy_static! {
    static ref DEFAULT_VALIDATOR: UploadValidator = UploadValidator::default();
}

/// Validate an upload against the fixed limits
pub fn validate_upload(file: &UploadDescriptor) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(file)
}
