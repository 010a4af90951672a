//! Filename validation
//!
//! Uploaded filenames are checked for traversal sequences, characters that
//! are reserved on common filesystems, and Windows device names.

use crate::errors::{CheckResult, ValidationError};
use lazy_static::lazy_static;
use regex::Regex;

/// Characters that may not appear anywhere in a filename
pub const RESERVED_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

lazy_static! {
    static ref RESERVED_DEVICE_REGEX: Regex =
        Regex::new(r"(?i)^(CON|PRN|AUX|NUL|COM[1-9]|LPT[1-9])$").unwrap();
}

/// Returns true if the name contains a `..` sequence
pub fn has_traversal(name: &str) -> bool {
    name.contains("..")
}

/// Returns true if the name contains any reserved character
pub fn has_reserved_chars(name: &str) -> bool {
    name.contains(RESERVED_FILENAME_CHARS)
}

/// Returns true if the whole name is a reserved device such as `CON` or `lpt3`
pub fn is_reserved_device_name(name: &str) -> bool {
    RESERVED_DEVICE_REGEX.is_match(name)
}

/// Validate that a filename is safe to store
pub fn safe_filename(name: &str) -> CheckResult<()> {
    if has_traversal(name) || has_reserved_chars(name) || is_reserved_device_name(name) {
        Err(ValidationError::format("Filename contains invalid characters"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("../../etc/passwd" ; "traversal")]
    #[test_case("holiday..png" ; "double dot")]
    #[test_case("a<b.png" ; "angle bracket")]
    #[test_case("c:photo.png" ; "colon")]
    #[test_case("say\"hi\".png" ; "quote")]
    #[test_case("dir\\photo.png" ; "backslash")]
    #[test_case("pipe|.png" ; "pipe")]
    #[test_case("what?.png" ; "question mark")]
    #[test_case("star*.png" ; "asterisk")]
    #[test_case("CON" ; "device")]
    #[test_case("lpt9" ; "lower case device")]
    fn test_unsafe_filenames(name: &str) {
        assert!(safe_filename(name).is_err(), "expected unsafe: {}", name);
    }

    #[test_case("beach.png" ; "plain")]
    #[test_case("CON.png" ; "device with extension")]
    #[test_case("COM0" ; "com zero")]
    #[test_case("my photo (1).jpeg" ; "spaces and parens")]
    #[test_case(".hidden.png" ; "leading dot")]
    fn test_safe_filenames(name: &str) {
        assert!(safe_filename(name).is_ok(), "expected safe: {}", name);
    }

    #[test]
    fn test_error_message() {
        let err = safe_filename("a/b.png").unwrap_err();
        assert_eq!(err.to_string(), "Filename contains invalid characters");
        assert!(err.is_blocking());
    }
}
