use tracing::debug;

use crate::domain::{FieldDefinition, FieldValue};
use crate::form::error::ErrorStatus;
use crate::form::events::{EditorAction, EventBindings, FieldEvent};
use crate::form::field::strategy::strategy_for;
use crate::form::field::template::compute_template_variables;
use crate::presentation::CapabilityProbe;

use super::TimeFieldEditor;

impl TimeFieldEditor {
    /// Builds an editor, probing the presentation layer once for native
    /// time input support.
    pub fn new(
        definition: FieldDefinition,
        value: Option<FieldValue>,
        probe: &dyn CapabilityProbe,
    ) -> Self {
        Self::with_capability(definition, value, probe.supports_native_time_input())
    }

    pub fn with_capability(
        definition: FieldDefinition,
        value: Option<FieldValue>,
        supports_native_time_input: bool,
    ) -> Self {
        let strategy = strategy_for(supports_native_time_input);
        let initial_value = value.unwrap_or_default();
        let variables = compute_template_variables(strategy, &definition, Some(&initial_value));
        let control = strategy.build_control(&definition, &variables.display_text);

        let mut editor = Self {
            definition,
            initial_value,
            supports_native_time_input,
            strategy,
            control,
            error_status: ErrorStatus::Unvalidated,
            bindings: EventBindings::new(),
            listeners: Vec::new(),
            dirty: false,
        };
        editor.attach();
        debug!(
            field = %editor.definition.identifier,
            native = supports_native_time_input,
            display = %variables.display_text,
            "time field editor created"
        );
        editor
    }

    fn attach(&mut self) {
        self.listeners = vec![
            self.bindings.on(FieldEvent::Blur, EditorAction::Validate),
            self.bindings.on(FieldEvent::ValueChange, EditorAction::Validate),
        ];
    }

    /// Unregisters the listeners installed at construction. Events sent
    /// afterwards are ignored.
    pub fn teardown(&mut self) {
        let removed = self
            .listeners
            .drain(..)
            .filter(|handle| self.bindings.off(*handle))
            .count();
        debug!(field = %self.definition.identifier, removed, "time field editor torn down");
    }
}
