use serde::Serialize;

use crate::domain::{FieldDefinition, FieldValue};

use super::strategy::TimeInputStrategy;

/// Variables handed to the templating layer for the initial render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariables {
    pub is_required: bool,
    pub supports_native_time_input: bool,
    pub use_seconds: bool,
    pub display_text: String,
}

pub fn compute_template_variables(
    strategy: &dyn TimeInputStrategy,
    definition: &FieldDefinition,
    value: Option<&FieldValue>,
) -> TemplateVariables {
    let display_text = value
        .and_then(FieldValue::seconds_since_midnight)
        .map(|seconds| strategy.format_for_display(seconds, definition.use_seconds()))
        .unwrap_or_default();
    TemplateVariables {
        is_required: definition.is_required,
        supports_native_time_input: strategy.supports_native_time_input(),
        use_seconds: definition.use_seconds(),
        display_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::field::strategy::strategy_for;

    #[test]
    fn empty_value_renders_empty_text() {
        let definition = FieldDefinition::time("opening").with_required(true);
        let vars = compute_template_variables(strategy_for(false), &definition, None);
        assert_eq!(vars.display_text, "");
        assert!(vars.is_required);
        assert!(!vars.supports_native_time_input);
    }

    #[test]
    fn manual_without_seconds_uses_short_form() {
        let definition = FieldDefinition::time("opening");
        let value = FieldValue::from_seconds(52_200).unwrap();
        let vars = compute_template_variables(strategy_for(false), &definition, Some(&value));
        assert_eq!(vars.display_text, "14:30");
    }

    #[test]
    fn native_or_seconds_use_long_form() {
        let value = FieldValue::from_seconds(52_200).unwrap();
        let plain = FieldDefinition::time("opening");
        let native = compute_template_variables(strategy_for(true), &plain, Some(&value));
        assert_eq!(native.display_text, "14:30:00");
        let seconds = FieldDefinition::time("opening").with_use_seconds(true);
        let manual = compute_template_variables(strategy_for(false), &seconds, Some(&value));
        assert_eq!(manual.display_text, "14:30:00");
        assert!(manual.use_seconds);
    }

    #[test]
    fn serializes_camel_case_keys() {
        let definition = FieldDefinition::time("opening");
        let vars = compute_template_variables(strategy_for(true), &definition, None);
        let json = serde_json::to_value(&vars).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isRequired": false,
                "supportsNativeTimeInput": true,
                "useSeconds": false,
                "displayText": ""
            })
        );
    }
}
