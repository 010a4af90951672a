//! Markup sanitization passes
//!
//! Regex-based removal of tags, script blocks, `javascript:` and `data:`
//! schemes and inline event-handler attributes. This is not an HTML parser;
//! it strips the listed patterns and nothing more.

use super::SanitizeResult;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `<script ...> ... </script>`, across lines
    static ref SCRIPT_BLOCK_REGEX: Regex = Regex::new(r"(?is)<script\b.*?</script>").unwrap();

    /// Any tag-like run `<...>`
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();

    static ref JAVASCRIPT_URI_REGEX: Regex = Regex::new(r"(?i)javascript:").unwrap();

    /// Attribute names such as `onclick=` or `onload =`
    static ref EVENT_HANDLER_REGEX: Regex = Regex::new(r"(?i)on[0-9A-Za-z_]+\s*=").unwrap();

    static ref DATA_URI_REGEX: Regex = Regex::new(r"(?i)data:").unwrap();
}

fn remove_matches(input: &str, regex: &Regex, details: &str) -> SanitizeResult<String> {
    let result = regex.replace_all(input, "");

    if result == input {
        SanitizeResult::unmodified(input.to_string())
    } else {
        SanitizeResult::modified(result.into_owned(), Some(details.to_string()))
    }
}

/// Remove `<script>` blocks together with their content
pub fn remove_script_blocks(input: &str) -> SanitizeResult<String> {
    remove_matches(input, &SCRIPT_BLOCK_REGEX, "Removed script blocks")
}

/// Remove all HTML tags from the input string
pub fn strip_html_tags(input: &str) -> SanitizeResult<String> {
    remove_matches(input, &TAG_REGEX, "Removed HTML tags")
}

/// Remove `javascript:` scheme prefixes
pub fn remove_javascript_uris(input: &str) -> SanitizeResult<String> {
    remove_matches(input, &JAVASCRIPT_URI_REGEX, "Removed javascript: URIs")
}

/// Remove inline event-handler attribute names
pub fn remove_event_handlers(input: &str) -> SanitizeResult<String> {
    remove_matches(input, &EVENT_HANDLER_REGEX, "Removed event handlers")
}

/// Remove `data:` scheme prefixes.
///
/// This also strips legitimate data URIs and any prose containing `data:`.
pub fn remove_data_uris(input: &str) -> SanitizeResult<String> {
    remove_matches(input, &DATA_URI_REGEX, "Removed data: URIs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_script_blocks() {
        let input = "before <SCRIPT type=\"text/javascript\">\nif (a < b) { go(); }\n</script> after";
        let result = remove_script_blocks(input);
        assert!(result.was_modified);
        assert_eq!(result.sanitized, "before  after");

        // Unterminated blocks are left for the tag pass
        let open = remove_script_blocks("<script>alert(1)");
        assert!(!open.was_modified);
    }

    #[test]
    fn test_script_blocks_are_lazy() {
        let input = "<script>a()</script>keep<script>b()</script>";
        assert_eq!(remove_script_blocks(input).sanitized, "keep");
    }

    #[test]
    fn test_strip_html_tags() {
        let input = "<p>Test <strong>bold</strong> text</p>";
        let result = strip_html_tags(input);

        assert!(result.was_modified);
        assert_eq!(result.sanitized, "Test bold text");

        let clean = "Plain text without HTML";
        let result = strip_html_tags(clean);

        assert!(!result.was_modified);
        assert_eq!(result.sanitized, clean);
    }

    #[test]
    fn test_lone_angle_brackets_survive() {
        let result = strip_html_tags("3 < 5 and 7 > 2");
        assert_eq!(result.sanitized, "3  2");

        let result = strip_html_tags("a < b");
        assert!(!result.was_modified);
    }

    #[test]
    fn test_remove_javascript_uris() {
        let result = remove_javascript_uris("JavaScript:alert('x')");
        assert!(result.was_modified);
        assert_eq!(result.sanitized, "alert('x')");
        assert!(!remove_javascript_uris("java script").was_modified);
    }

    #[test]
    fn test_remove_event_handlers() {
        let result = remove_event_handlers("img ONERROR = steal() onload=go()");
        assert_eq!(result.sanitized, "img  steal() go()");
        assert!(!remove_event_handlers("on the beach").was_modified);
    }

    #[test]
    fn test_remove_data_uris() {
        let result = remove_data_uris("Data:image/png;base64,AAAA");
        assert!(result.was_modified);
        assert_eq!(result.sanitized, "image/png;base64,AAAA");
        assert_eq!(result.details.as_deref(), Some("Removed data: URIs"));
    }
}
