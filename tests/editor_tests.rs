use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;
use timefield::{
    BAD_INPUT_MESSAGE, ErrorStatus, FieldDefinition, FieldValue, FixedCapability,
    PATTERN_MESSAGE, REQUIRED_MESSAGE, TimeFieldEditor,
};

fn definition(required: bool, use_seconds: bool) -> FieldDefinition {
    FieldDefinition::time("opening")
        .with_required(required)
        .with_use_seconds(use_seconds)
}

fn manual(required: bool, use_seconds: bool) -> TimeFieldEditor {
    TimeFieldEditor::with_capability(definition(required, use_seconds), None, false)
}

fn native(required: bool) -> TimeFieldEditor {
    TimeFieldEditor::with_capability(definition(required, false), None, true)
}

#[test]
fn required_empty_text_reports_required() {
    let mut editor = manual(true, false);
    editor.validate();
    assert_eq!(editor.error_status(), &ErrorStatus::invalid(REQUIRED_MESSAGE));
}

#[test]
fn short_form_extracts_without_seconds() {
    let mut editor = manual(false, false);
    editor.set_input_text("14:30");
    editor.validate();
    assert_eq!(editor.field_value(), Some(52_200));
    assert_eq!(editor.error_status(), &ErrorStatus::Valid);
}

#[test]
fn long_form_extracts_seconds() {
    let mut editor = manual(false, true);
    editor.set_input_text("14:30:45");
    assert_eq!(editor.field_value(), Some(52_245));
}

#[test]
fn malformed_minutes_fail_validation_and_extraction() {
    let mut editor = manual(false, false);
    editor.set_input_text("14:3");
    editor.validate();
    assert_eq!(editor.error_status(), &ErrorStatus::invalid(PATTERN_MESSAGE));
    assert_eq!(editor.field_value(), None);
    assert!(editor.try_field_value().is_err());
}

#[test]
fn non_numeric_component_yields_none() {
    let mut editor = manual(false, false);
    editor.set_input_text("14:3x");
    assert_eq!(editor.field_value(), None);
    assert!(editor.error_status().is_invalid());
}

#[test]
fn native_empty_optional_field_is_valid_and_null() {
    let mut editor = native(false);
    editor.validate();
    assert_eq!(editor.error_status(), &ErrorStatus::Valid);
    assert_eq!(editor.field_value(), None);
}

#[test]
fn stored_value_renders_short_form_for_manual_input() {
    let editor = TimeFieldEditor::with_capability(
        definition(false, false),
        FieldValue::from_seconds(52_200).ok(),
        false,
    );
    let vars = editor.template_variables();
    assert_eq!(vars.display_text, "14:30");
    assert!(!vars.supports_native_time_input);
    assert_eq!(editor.input_text(), "14:30");
}

#[test]
fn stored_value_renders_long_form_for_native_input() {
    let editor = TimeFieldEditor::with_capability(
        definition(true, false),
        FieldValue::from_seconds(52_200).ok(),
        true,
    );
    let vars = editor.template_variables();
    assert_eq!(vars.display_text, "14:30:00");
    assert!(vars.supports_native_time_input);
    assert!(vars.is_required);
    assert_eq!(editor.field_value(), Some(52_200));
}

#[test]
fn out_of_range_text_is_accepted() {
    let mut editor = manual(false, false);
    editor.set_input_text("25:00");
    assert_eq!(editor.error_status(), &ErrorStatus::Valid);
    assert_eq!(editor.field_value(), Some(90_000));
    editor.set_input_text("14:75");
    assert_eq!(editor.error_status(), &ErrorStatus::Valid);
    assert_eq!(editor.field_value(), Some(54_900));
}

#[test]
fn native_rejects_unparseable_input() {
    let mut editor = native(false);
    editor.set_input_text("25:00");
    assert_eq!(editor.error_status(), &ErrorStatus::invalid(BAD_INPUT_MESSAGE));
    assert_eq!(editor.field_value(), None);
    editor.set_input_text("14:30:45");
    assert_eq!(editor.error_status(), &ErrorStatus::Valid);
    assert_eq!(editor.field_value(), Some(52_245));
}

#[test]
fn native_midnight_is_a_value() {
    let mut editor = native(true);
    editor.set_input_text("00:00");
    assert_eq!(editor.error_status(), &ErrorStatus::Valid);
    assert_eq!(editor.field_value(), Some(0));
}

#[test]
fn status_starts_unvalidated_and_follows_edits() {
    let mut editor = manual(true, false);
    assert_eq!(editor.error_status(), &ErrorStatus::Unvalidated);
    for ch in "9:05".chars() {
        editor.handle_key(&KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
    }
    assert_eq!(editor.error_status(), &ErrorStatus::Valid);
    editor.handle_key(&KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    assert_eq!(editor.error_status(), &ErrorStatus::invalid(PATTERN_MESSAGE));
    editor.handle_key(&KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE));
    assert_eq!(editor.error_status(), &ErrorStatus::invalid(REQUIRED_MESSAGE));
    assert!(editor.is_dirty());
}

#[test]
fn blur_validates_without_edits() {
    let mut editor = native(true);
    editor.blur();
    assert_eq!(editor.error_status(), &ErrorStatus::invalid(REQUIRED_MESSAGE));
    assert!(!editor.is_dirty());
}

#[test]
fn teardown_stops_event_driven_validation() {
    let mut editor = manual(false, false);
    editor.set_input_text("14:30");
    assert_eq!(editor.error_status(), &ErrorStatus::Valid);
    assert!(editor.is_attached());
    editor.teardown();
    assert!(!editor.is_attached());
    editor.set_input_text("nonsense");
    editor.blur();
    assert_eq!(editor.error_status(), &ErrorStatus::Valid);
    editor.validate();
    assert_eq!(editor.error_status(), &ErrorStatus::invalid(PATTERN_MESSAGE));
}

#[test]
fn capability_is_probed_once_at_construction() {
    let editor = TimeFieldEditor::new(definition(false, false), None, &FixedCapability(true));
    assert!(editor.supports_native_time_input());
    let mut copy = editor.clone();
    copy.set_input_text("10:00");
    assert!(copy.supports_native_time_input());
    assert!(copy.template_variables().supports_native_time_input);
}

#[test]
fn round_trip_with_seconds_is_exact() {
    for seconds in 0..timefield::SECONDS_PER_DAY {
        let editor = TimeFieldEditor::with_capability(
            definition(false, true),
            FieldValue::from_seconds(seconds).ok(),
            false,
        );
        assert_eq!(editor.field_value(), Some(seconds), "value {seconds}");
    }
}

#[test]
fn round_trip_without_seconds_truncates_to_minutes() {
    let editor = TimeFieldEditor::with_capability(
        definition(false, false),
        FieldValue::from_seconds(52_245).ok(),
        false,
    );
    assert_eq!(editor.field_value(), Some(52_200));
}

#[test]
fn required_message_tracks_emptiness_in_both_policies() {
    for native_input in [false, true] {
        for required in [false, true] {
            for text in ["", "14:30", "14:3", "xx"] {
                let mut editor = TimeFieldEditor::with_capability(
                    definition(required, false),
                    None,
                    native_input,
                );
                editor.set_input_text(text);
                let is_required_error =
                    editor.error_status() == &ErrorStatus::invalid(REQUIRED_MESSAGE);
                assert_eq!(
                    is_required_error,
                    required && text.is_empty(),
                    "native={native_input} required={required} text={text:?}"
                );
            }
        }
    }
}

proptest! {
    #[test]
    fn long_form_extraction_is_exact(h in 0u32..100, m in 0u32..100, s in 0u32..100) {
        let mut editor = manual(false, true);
        editor.set_input_text(&format!("{h}:{m:02}:{s:02}"));
        prop_assert_eq!(editor.field_value(), Some(h * 3_600 + m * 60 + s));
        prop_assert_eq!(editor.error_status(), &ErrorStatus::Valid);
    }

    #[test]
    fn short_form_extraction_is_exact(h in 0u32..100, m in 0u32..100) {
        let mut editor = manual(false, false);
        editor.set_input_text(&format!("{h:02}:{m:02}"));
        prop_assert_eq!(editor.field_value(), Some(h * 3_600 + m * 60));
    }

    #[test]
    fn pattern_mismatch_is_reported(text in "[0-9:a-z ]{1,10}") {
        let mut editor = manual(false, false);
        editor.set_input_text(&text);
        let expected = if timefield::matches_time_pattern(&text) {
            ErrorStatus::Valid
        } else {
            ErrorStatus::invalid(PATTERN_MESSAGE)
        };
        prop_assert_eq!(editor.error_status(), &expected);
    }

    #[test]
    fn extraction_never_exceeds_two_digit_components(text in "[0-9:]{0,9}") {
        let mut editor = manual(false, false);
        editor.set_input_text(&text);
        if let Some(value) = editor.field_value() {
            prop_assert!(value <= 99 * 3_600 + 99 * 60 + 99);
            prop_assert!(timefield::matches_time_pattern(&text));
        }
    }
}
