//! Validator functions and utilities
//!
//! Reusable field checks shared by the record, upload and generated-content
//! validators. Each check returns a [`CheckResult`](crate::CheckResult)
//! so callers can fold it into a report.

pub mod filename;
pub mod text;
pub mod url;

pub use self::filename::*;
pub use self::text::*;
pub use self::url::*;
