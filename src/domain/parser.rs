use anyhow::{Context, Result, anyhow, bail};
use jsonschema::{Validator, validator_for};
use schemars::{JsonSchema, schema_for};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::schema::{FieldDefinition, FieldPayload, FieldValue};

/// Parse a field-definition document, checking it against the schema
/// derived from [`FieldDefinition`] first.
pub fn parse_field_definition(value: &Value) -> Result<FieldDefinition> {
    decode(value, "field definition")
}

/// Parse a stored field. Accepts the full payload object, a bare integer or
/// `null`.
pub fn parse_field_value(value: &Value) -> Result<FieldValue> {
    match value {
        Value::Null => Ok(FieldValue::empty()),
        Value::Number(number) => {
            let seconds = number
                .as_u64()
                .and_then(|raw| u32::try_from(raw).ok())
                .ok_or_else(|| anyhow!("field value {number} is not a non-negative integer"))?;
            FieldValue::from_seconds(seconds).context("invalid field value")
        }
        _ => {
            let payload: FieldPayload = decode(value, "field payload")?;
            FieldValue::try_from(payload).context("invalid field value")
        }
    }
}

fn decode<T>(value: &Value, label: &str) -> Result<T>
where
    T: JsonSchema + DeserializeOwned,
{
    let validator = payload_validator::<T>()?;
    let issues = validator
        .iter_errors(value)
        .map(|error| {
            let pointer = error.instance_path.to_string();
            let prefix = if pointer.is_empty() {
                "<root>".to_string()
            } else {
                pointer
            };
            format!("{prefix}: {error}")
        })
        .collect::<Vec<_>>();
    if !issues.is_empty() {
        bail!("invalid {label}: {}", issues.join("; "));
    }
    serde_json::from_value(value.clone()).with_context(|| format!("failed to decode {label}"))
}

fn payload_validator<T: JsonSchema>() -> Result<Validator> {
    let schema = serde_json::to_value(schema_for!(T)).context("failed to serialize payload schema")?;
    validator_for(&schema).context("failed to compile payload schema")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_definition_with_settings() {
        let definition = parse_field_definition(&json!({
            "identifier": "opening",
            "name": "Opening time",
            "isRequired": true,
            "fieldSettings": { "useSeconds": true }
        }))
        .unwrap();
        assert_eq!(definition.identifier, "opening");
        assert!(definition.is_required);
        assert!(definition.use_seconds());
        assert_eq!(definition.field_type_identifier, "eztime");
    }

    #[test]
    fn definition_defaults_are_lenient() {
        let definition = parse_field_definition(&json!({ "identifier": "closing" })).unwrap();
        assert!(!definition.is_required);
        assert!(!definition.use_seconds());
    }

    #[test]
    fn rejects_definition_with_wrong_types() {
        let err = parse_field_definition(&json!({
            "identifier": "opening",
            "isRequired": "yes"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("/isRequired"));
    }

    #[test]
    fn rejects_definition_without_identifier() {
        assert!(parse_field_definition(&json!({ "isRequired": true })).is_err());
    }

    #[test]
    fn parses_field_payloads_and_scalars() {
        let payload = parse_field_value(&json!({
            "fieldDefinitionIdentifier": "opening",
            "fieldValue": 52200
        }))
        .unwrap();
        assert_eq!(payload.seconds_since_midnight(), Some(52_200));
        assert!(parse_field_value(&json!({ "fieldValue": null })).unwrap().is_empty());
        assert!(parse_field_value(&Value::Null).unwrap().is_empty());
        assert_eq!(
            parse_field_value(&json!(0)).unwrap().seconds_since_midnight(),
            Some(0)
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(parse_field_value(&json!(86_400)).is_err());
        assert!(parse_field_value(&json!({ "fieldValue": 90_000 })).is_err());
        assert!(parse_field_value(&json!(-5)).is_err());
    }
}
