use std::collections::HashMap;
use std::fmt;

use crossterm::event::KeyEvent;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{FieldDefinition, FieldValue, TIME_FIELD_TYPE};
use crate::presentation::CapabilityProbe;

use super::error::ErrorStatus;
use super::field::TimeFieldEditor;
use super::field::components::InputControl;

/// What a hosting form needs from a field editor.
pub trait FieldEditor: fmt::Debug {
    fn field_type(&self) -> &str;
    fn definition(&self) -> &FieldDefinition;
    fn control(&self) -> &dyn InputControl;
    fn validate(&mut self);
    fn error_status(&self) -> &ErrorStatus;
    /// Value to persist, `null` when the field is empty.
    fn field_value(&self) -> Value;
    fn template_variables(&self) -> Value;
    fn handle_key(&mut self, key: &KeyEvent) -> bool;
    fn blur(&mut self);
    fn is_dirty(&self) -> bool;
    fn teardown(&mut self);
}

impl FieldEditor for TimeFieldEditor {
    fn field_type(&self) -> &str {
        TIME_FIELD_TYPE
    }

    fn definition(&self) -> &FieldDefinition {
        TimeFieldEditor::definition(self)
    }

    fn control(&self) -> &dyn InputControl {
        TimeFieldEditor::control(self)
    }

    fn validate(&mut self) {
        TimeFieldEditor::validate(self);
    }

    fn error_status(&self) -> &ErrorStatus {
        TimeFieldEditor::error_status(self)
    }

    fn field_value(&self) -> Value {
        TimeFieldEditor::field_value(self)
            .map(Value::from)
            .unwrap_or(Value::Null)
    }

    fn template_variables(&self) -> Value {
        json_or_null(
            &TimeFieldEditor::template_variables(self),
            &self.definition().identifier,
        )
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        TimeFieldEditor::handle_key(self, key)
    }

    fn blur(&mut self) {
        TimeFieldEditor::blur(self);
    }

    fn is_dirty(&self) -> bool {
        TimeFieldEditor::is_dirty(self)
    }

    fn teardown(&mut self) {
        TimeFieldEditor::teardown(self);
    }
}

fn json_or_null<T: Serialize>(value: &T, field: &str) -> Value {
    serde_json::to_value(value).unwrap_or_else(|err| {
        warn!(%field, %err, "failed to serialize template variables");
        Value::Null
    })
}

pub type EditorFactory =
    fn(FieldDefinition, Option<FieldValue>, &dyn CapabilityProbe) -> Box<dyn FieldEditor>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    Unknown(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Unknown(identifier) => {
                write!(f, "no field editor registered for '{identifier}'")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Field-type identifier to editor factory.
#[derive(Debug, Clone, Default)]
pub struct FieldEditorRegistry {
    factories: HashMap<String, EditorFactory>,
}

impl FieldEditorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TIME_FIELD_TYPE, time_editor);
        registry
    }

    pub fn register(&mut self, identifier: impl Into<String>, factory: EditorFactory) {
        let identifier = identifier.into();
        if self.factories.insert(identifier.clone(), factory).is_some() {
            warn!(%identifier, "replaced existing field editor");
        } else {
            debug!(%identifier, "registered field editor");
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    pub fn identifiers(&self) -> Vec<&str> {
        let mut identifiers = self.factories.keys().map(String::as_str).collect::<Vec<_>>();
        identifiers.sort_unstable();
        identifiers
    }

    pub fn create(
        &self,
        definition: FieldDefinition,
        value: Option<FieldValue>,
        probe: &dyn CapabilityProbe,
    ) -> Result<Box<dyn FieldEditor>, RegistryError> {
        let factory = self
            .factories
            .get(&definition.field_type_identifier)
            .ok_or_else(|| RegistryError::Unknown(definition.field_type_identifier.clone()))?;
        Ok(factory(definition, value, probe))
    }
}

fn time_editor(
    definition: FieldDefinition,
    value: Option<FieldValue>,
    probe: &dyn CapabilityProbe,
) -> Box<dyn FieldEditor> {
    Box::new(TimeFieldEditor::new(definition, value, probe))
}
