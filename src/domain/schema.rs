use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::clock::{SECONDS_PER_DAY, TimeRangeError};

/// Field-type identifier the time editor is registered under.
pub const TIME_FIELD_TYPE: &str = "eztime";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldSettings {
    /// Whether the field stores seconds precision.
    #[serde(default)]
    pub use_seconds: bool,
}

/// Schema metadata for one content field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub identifier: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_field_type")]
    pub field_type_identifier: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub field_settings: FieldSettings,
}

fn default_field_type() -> String {
    TIME_FIELD_TYPE.to_string()
}

impl FieldDefinition {
    pub fn time(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: None,
            description: None,
            field_type_identifier: default_field_type(),
            is_required: false,
            field_settings: FieldSettings::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.is_required = required;
        self
    }

    pub fn with_use_seconds(mut self, use_seconds: bool) -> Self {
        self.field_settings.use_seconds = use_seconds;
        self
    }

    pub fn use_seconds(&self) -> bool {
        self.field_settings.use_seconds
    }

    pub fn display_label(&self) -> String {
        match &self.name {
            Some(name) if name.eq_ignore_ascii_case(&self.identifier) => name.clone(),
            Some(name) => format!("{name} ({})", self.identifier),
            None => self.identifier.clone(),
        }
    }
}

/// Wire form of a stored field, as delivered by the content repository.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldPayload {
    #[serde(default)]
    pub field_definition_identifier: Option<String>,
    #[serde(default)]
    pub field_value: Option<u32>,
}

/// Stored time value: seconds since midnight, or nothing for an empty field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldValue {
    seconds_since_midnight: Option<u32>,
}

impl FieldValue {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_seconds(seconds: u32) -> Result<Self, TimeRangeError> {
        if seconds >= SECONDS_PER_DAY {
            return Err(TimeRangeError(seconds));
        }
        Ok(Self {
            seconds_since_midnight: Some(seconds),
        })
    }

    pub fn seconds_since_midnight(&self) -> Option<u32> {
        self.seconds_since_midnight
    }

    pub fn is_empty(&self) -> bool {
        self.seconds_since_midnight.is_none()
    }
}

impl TryFrom<FieldPayload> for FieldValue {
    type Error = TimeRangeError;

    fn try_from(payload: FieldPayload) -> Result<Self, Self::Error> {
        match payload.field_value {
            Some(seconds) => FieldValue::from_seconds(seconds),
            None => Ok(FieldValue::empty()),
        }
    }
}
