mod builder;
mod input;
mod value_ops;

use crate::domain::{FieldDefinition, FieldValue};
use crate::form::error::ErrorStatus;
use crate::form::events::{EventBindings, ListenerHandle};

use super::components::InputControl;
use super::strategy::TimeInputStrategy;

/// Editing state of one rendered time field.
///
/// The capability flag and strategy are fixed at construction. Only
/// [`TimeFieldEditor::validate`] writes `error_status`.
#[derive(Debug, Clone)]
pub struct TimeFieldEditor {
    definition: FieldDefinition,
    initial_value: FieldValue,
    supports_native_time_input: bool,
    strategy: &'static dyn TimeInputStrategy,
    control: Box<dyn InputControl>,
    error_status: ErrorStatus,
    bindings: EventBindings,
    listeners: Vec<ListenerHandle>,
    dirty: bool,
}

impl TimeFieldEditor {
    pub fn definition(&self) -> &FieldDefinition {
        &self.definition
    }

    pub fn supports_native_time_input(&self) -> bool {
        self.supports_native_time_input
    }

    pub fn control(&self) -> &dyn InputControl {
        self.control.as_ref()
    }

    pub fn error_status(&self) -> &ErrorStatus {
        &self.error_status
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }
}
