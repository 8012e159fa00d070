use speech_bot::infrastructure::observability::sanitize_for_log;

#[test]
fn given_blank_text_when_sanitized_then_marks_it_empty() {
    assert_eq!(sanitize_for_log("   "), "[EMPTY]");
}

#[test]
fn given_short_question_when_sanitized_then_is_kept_trimmed() {
    assert_eq!(sanitize_for_log("  what time is it? "), "what time is it?");
}

#[test]
fn given_long_text_when_sanitized_then_is_truncated_with_length() {
    let text = "ä".repeat(150);

    let sanitized = sanitize_for_log(&text);

    assert!(sanitized.starts_with(&"ä".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_credentials_in_text_when_sanitized_then_values_are_redacted() {
    let sanitized = sanitize_for_log("use token=abc123 and Bearer eyJhbGci then password=hunter2");

    assert!(!sanitized.contains("abc123"));
    assert!(!sanitized.contains("eyJhbGci"));
    assert!(!sanitized.contains("hunter2"));
    assert!(sanitized.contains("token=[REDACTED]"));
    assert!(sanitized.contains("Bearer [REDACTED]"));
}

#[test]
fn given_repeated_secret_when_sanitized_then_every_occurrence_is_redacted() {
    let sanitized = sanitize_for_log("api_key=one&api_key=two");

    assert_eq!(sanitized, "api_key=[REDACTED]&api_key=[REDACTED]");
}
