use std::borrow::Cow;

use crate::constants::DEFAULT_PROMPT_TEMPLATE;
use crate::handlers::prompt::{
    NoteRequest, PromptSettings, PromptSettingsInput, render_prompt, validate_note,
};

#[test]
fn replaces_only_first_placeholder() {
    let prompt = render_prompt("A: {noteContent} B: {noteContent}", "note");
    assert_eq!(prompt, "A: note B: {noteContent}");
}

#[test]
fn template_without_placeholder_is_sent_as_is() {
    assert_eq!(render_prompt("no slot here", "note"), "no slot here");
}

#[test]
fn note_text_is_not_reinterpreted_as_placeholder() {
    let prompt = render_prompt("X {noteContent} Y", "{noteContent}");
    assert_eq!(prompt, "X {noteContent} Y");
}

#[test]
fn defaults_apply_without_settings() {
    let settings = PromptSettings::resolve(None);
    assert_eq!(settings.template, Cow::Borrowed(DEFAULT_PROMPT_TEMPLATE));
    assert!(settings.include_term_explanations);
    assert_eq!(settings.max_length, 2000);
    assert_eq!(settings.token_cap(), 2000);
}

#[test]
fn empty_template_and_zero_length_fall_back_to_defaults() {
    let input = PromptSettingsInput {
        template: Some(String::new()),
        include_term_explanations: Some(false),
        max_length: Some(0.0),
    };
    let settings = PromptSettings::resolve(Some(&input));
    assert_eq!(settings.template, DEFAULT_PROMPT_TEMPLATE);
    assert!(!settings.include_term_explanations);
    assert_eq!(settings.max_length, 2000);
}

#[test]
fn token_cap_clamps_to_four_thousand() {
    for (requested, expected) in [
        (1.0, 1),
        (1500.5, 1500),
        (3999.0, 3999),
        (4000.0, 4000),
        (4001.0, 4000),
        (9000.0, 4000),
        (5_000_000_000.0, 4000),
    ] {
        let input = PromptSettingsInput {
            max_length: Some(requested),
            ..Default::default()
        };
        assert_eq!(PromptSettings::resolve(Some(&input)).token_cap(), expected);
    }
}

#[test]
fn request_deserializes_camel_case_fields() {
    let request: NoteRequest = serde_json::from_str(
        r#"{"noteContent":"n","settings":{"template":"t {noteContent}","includeTermExplanations":false,"maxLength":300}}"#,
    )
    .unwrap();

    assert_eq!(request.note_content.as_deref(), Some("n"));
    let settings = request.settings.unwrap();
    assert_eq!(settings.template.as_deref(), Some("t {noteContent}"));
    assert_eq!(settings.include_term_explanations, Some(false));
    assert_eq!(settings.max_length, Some(300.0));
}

#[test]
fn validate_note_keeps_surrounding_whitespace() {
    assert_eq!(validate_note(Some("  keep me  ")).unwrap(), "  keep me  ");
}

#[test]
fn validate_note_counts_utf16_units_not_bytes() {
    let note = "ü".repeat(10_000);
    assert!(note.len() > 10_000);
    assert!(validate_note(Some(&note)).is_ok());

    let too_long = "ü".repeat(10_001);
    let err = validate_note(Some(&too_long)).unwrap_err();
    assert_eq!(err.message, "Note content is too long (max 10,000 characters)");
}

#[test]
fn validate_note_rejects_absent_note() {
    let err = validate_note(None).unwrap_err();
    assert_eq!(err.status_code, 400);
    assert_eq!(err.to_json(), serde_json::json!({ "error": "Note content cannot be empty" }));
}

#[test]
fn astral_characters_count_as_two_units() {
    let at_limit = "😀".repeat(5_000);
    assert!(validate_note(Some(&at_limit)).is_ok());

    let over_limit = "😀".repeat(5_001);
    assert_eq!(over_limit.chars().count(), 5_001);
    let err = validate_note(Some(&over_limit)).unwrap_err();
    assert_eq!(err.status_code, 400);
}

#[test]
fn sub_one_and_negative_lengths_use_default() {
    for requested in [0.5, -10.0] {
        let input = PromptSettingsInput {
            max_length: Some(requested),
            ..Default::default()
        };
        assert_eq!(PromptSettings::resolve(Some(&input)).max_length, 2000);
    }
}

#[test]
fn malformed_settings_fields_fall_back_to_defaults() {
    let request: NoteRequest = serde_json::from_str(
        r#"{"noteContent":"n","settings":{"template":7,"includeTermExplanations":"yes","maxLength":"300"}}"#,
    )
    .unwrap();
    let settings = PromptSettings::resolve(request.settings.as_ref());
    assert_eq!(settings.template, DEFAULT_PROMPT_TEMPLATE);
    assert!(settings.include_term_explanations);
    assert_eq!(settings.max_length, 2000);
}

#[test]
fn non_object_settings_are_ignored() {
    for raw in [r#""oops""#, "null", "42", "true"] {
        let request: NoteRequest =
            serde_json::from_str(&format!(r#"{{"noteContent":"n","settings":{}}}"#, raw)).unwrap();
        assert!(request.settings.is_none());
    }
}
