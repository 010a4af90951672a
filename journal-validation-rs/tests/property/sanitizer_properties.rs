use journal_validation_rs::prelude::*;
use proptest::prelude::*;

/// Text assembled from fragments of the patterns the sanitizer removes
fn hostile_text() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("<".to_string()),
        Just(">".to_string()),
        Just("<script>".to_string()),
        Just("</script>".to_string()),
        Just("java".to_string()),
        Just("script:".to_string()),
        Just("JavaScript:".to_string()),
        Just("on".to_string()),
        Just("click".to_string()),
        Just("=".to_string()),
        Just("da".to_string()),
        Just("ta:".to_string()),
        Just("data:".to_string()),
        Just(" ".to_string()),
        Just("\t\n".to_string()),
        "[a-zA-Z0-9]{0,4}",
    ];
    prop::collection::vec(fragment, 0..24).prop_map(|parts| parts.concat())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![".{0,200}", hostile_text()]
}

fn mood() -> impl Strategy<Value = Mood> {
    let label = prop_oneof![
        Just("Positive".to_string()),
        Just("Negative".to_string()),
        Just("Neutral".to_string()),
        "[A-Za-z]{0,10}",
    ];
    (label, any::<f64>()).prop_map(|(label, score)| Mood { label, score })
}

fn record() -> impl Strategy<Value = MemoryRecord> {
    (
        any_text(),
        any_text(),
        prop::collection::vec(".{0,60}", 0..25),
        mood(),
        prop::option::of(prop_oneof![
            Just("https://example.com/a.png".to_string()),
            ".{0,40}",
        ]),
    )
        .prop_map(|(title, content, tags, mood, image_url)| MemoryRecord {
            title,
            content,
            tags,
            mood,
            image_url,
        })
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(s in any_text()) {
        let once = sanitize(&s);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn sanitized_text_has_no_tag_runs(s in any_text()) {
        let out = sanitize(&s);
        if let Some(open) = out.find('<') {
            prop_assert!(!out[open..].contains('>'), "tag-like run survived in {:?}", out);
        }
    }

    #[test]
    fn sanitized_text_has_no_schemes_or_handlers(s in hostile_text()) {
        let out = sanitize(&s).to_lowercase();
        prop_assert!(!out.contains("javascript:"));
        prop_assert!(!out.contains("data:"));
        prop_assert!(!out.contains("onclick="));
    }

    #[test]
    fn sanitized_whitespace_is_normalised(s in any_text()) {
        let out = sanitize(&s);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains(|c: char| c.is_whitespace() && c != ' '));
    }

    #[test]
    fn record_validation_partitions(rec in record()) {
        let result = validate_memory_record(&rec);
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
    }

    #[test]
    fn upload_validation_partitions(
        name in ".{0,300}",
        size in any::<u64>(),
        mime in prop_oneof![Just("image/png".to_string()), "[a-z/]{0,12}"],
    ) {
        let result = validate_upload(&UploadDescriptor::new(name, size, mime));
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
        prop_assert!(result.warnings().is_empty());
    }

    #[test]
    fn generated_validity_depends_only_on_length(s in ".{0,300}") {
        let result = validate_generated_content(&s);
        prop_assert_eq!(result.is_valid(), s.trim().chars().count() >= 10);
    }

    #[test]
    fn sanitized_tags_are_normalised(tags in prop::collection::vec(any_text(), 0..40)) {
        let cleaned = sanitize_tags(&tags);
        prop_assert!(cleaned.len() <= 20);
        for tag in &cleaned {
            prop_assert!(!tag.is_empty());
            prop_assert!(tag.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'));
        }
    }
}
