//! Validation reports
//!
//! A [`ValidationResult`] is the outcome of one validation call. It is built
//! through a [`ReportBuilder`], which keeps collecting findings after the
//! first failure so the caller sees every problem at once.

use crate::errors::{CheckResult, ValidationError};
use serde::Serialize;

/// Outcome of a single validation call
///
/// `is_valid` is true exactly when `errors` is empty. Warnings never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no findings
    pub fn ok() -> Self {
        ReportBuilder::new().finish()
    }

    /// Whether the validated input may proceed
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Blocking problems, in the order they were found
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Advisory notices, in the order they were found
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns true if any warning was raised
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Split into `(errors, warnings)`
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.errors, self.warnings)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Accumulator for findings
#[derive(Debug, Default)]
pub struct ReportBuilder {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ReportBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a finding to errors or warnings depending on its kind
    pub fn push(&mut self, finding: ValidationError) -> &mut Self {
        if finding.is_blocking() {
            self.errors.push(finding.to_string());
        } else {
            self.warnings.push(finding.to_string());
        }
        self
    }

    /// Record the outcome of a field check, ignoring passes
    pub fn check(&mut self, outcome: CheckResult<()>) -> &mut Self {
        if let Err(finding) = outcome {
            self.push(finding);
        }
        self
    }

    /// Finish and produce the immutable result
    pub fn finish(self) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationResult::ok();
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let mut builder = ReportBuilder::new();
        builder.push(ValidationError::quality("Content may be repetitive"));
        let report = builder.finish();
        assert!(report.is_valid());
        assert_eq!(report.warnings(), ["Content may be repetitive"]);
    }

    #[test]
    fn test_push_routes_by_kind() {
        let mut builder = ReportBuilder::new();
        builder
            .push(ValidationError::bound("Maximum 20 tags allowed"))
            .push(ValidationError::quality("Empty tag found at index 2"))
            .check(Ok(()))
            .check(Err(ValidationError::format("Image URL must be a valid URL")));

        let report = builder.finish();
        assert!(!report.is_valid());
        assert_eq!(
            report.errors(),
            ["Maximum 20 tags allowed", "Image URL must be a valid URL"]
        );
        assert_eq!(report.warnings(), ["Empty tag found at index 2"]);
    }

    #[test]
    fn test_serializes_in_camel_case() {
        let mut builder = ReportBuilder::new();
        builder.push(ValidationError::bound("Generated content too short"));
        let json = serde_json::to_value(builder.finish()).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"][0], "Generated content too short");
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }
}
