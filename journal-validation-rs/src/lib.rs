//! # Journal Validation Library
//!
//! Validation and sanitization for memory journal submissions. Everything in
//! this crate is a pure function of its arguments: no I/O, no shared mutable
//! state, safe to call from any number of threads.
//!
//! ## Components
//!
//! - [`sanitize`] strips markup, script blocks and URI-scheme patterns from
//!   freeform text
//! - [`validate_memory_record`] checks a [`MemoryRecord`] field by field
//! - [`validate_upload`] checks an [`UploadDescriptor`] before bytes are stored
//! - [`validate_generated_content`] screens AI output before it is displayed
//! - [`validate_user_permissions`] and [`validate_rate_limit`] are the
//!   ownership and quota predicates
//!
//! Validators never fail on bad input. They return a [`ValidationResult`]
//! listing every blocking error and every advisory warning found.

pub mod config;
mod errors;
mod report;
pub mod generated;
pub mod policy;
pub mod record;
pub mod sanitizers;
pub mod upload;
pub mod validators;

pub use config::ValidationConfig;
pub use errors::{CheckResult, ConfigError, ValidationError};
pub use generated::{validate_generated_content, ContentScreener};
pub use policy::{validate_rate_limit, validate_user_permissions, RateLimitPolicy};
pub use record::{
    prepare_memory, validate_memory_record, validate_memory_value, MemoryRecord, Mood, MoodLabel,
    PreparedMemory, RecordValidator,
};
pub use report::{ReportBuilder, ValidationResult};
pub use sanitizers::{sanitize, sanitize_tags};
pub use upload::{validate_upload, UploadDescriptor, UploadValidator};

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::config::ValidationConfig;
    pub use crate::errors::{CheckResult, ConfigError, ValidationError};
    pub use crate::generated::{validate_generated_content, ContentScreener};
    pub use crate::policy::{validate_rate_limit, validate_user_permissions};
    pub use crate::record::{
        validate_memory_record, validate_memory_value, MemoryRecord, Mood, MoodLabel,
        RecordValidator,
    };
    pub use crate::report::ValidationResult;
    pub use crate::sanitizers::{sanitize, sanitize_tags};
    pub use crate::upload::{validate_upload, UploadDescriptor};
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum title length in characters, after sanitization
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum content length in characters, after sanitization
pub const MAX_CONTENT_CHARS: usize = 5000;

/// Maximum number of tags on a record
pub const MAX_TAGS: usize = 20;

/// Maximum tag length in characters, after sanitization
pub const MAX_TAG_CHARS: usize = 50;

/// Maximum upload size (5 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Maximum filename length in characters
pub const MAX_FILENAME_CHARS: usize = 255;

/// Maximum URL length in characters
pub const MAX_URL_CHARS: usize = 2083;

/// Requests allowed per rate window
pub const MAX_REQUESTS_PER_WINDOW: u64 = 100;

/// Default rate window (one hour)
pub const DEFAULT_RATE_WINDOW_SECS: u64 = 3600;

/// Generated text shorter than this (trimmed) is rejected
pub const MIN_GENERATED_CHARS: usize = 10;

/// Generated text longer than this (trimmed) raises a warning
pub const MAX_GENERATED_CHARS: usize = 2000;

/// Repetition is only judged above this many sentences
pub const REPETITION_MIN_SENTENCES: usize = 3;

/// Distinct-to-total sentence ratio below which text counts as repetitive
pub const REPETITION_UNIQUE_RATIO: f64 = 0.7;
