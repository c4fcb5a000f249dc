use tracing::{debug, trace};

use crate::form::error::ExtractionError;
use crate::form::field::template::{TemplateVariables, compute_template_variables};

use super::TimeFieldEditor;

impl TimeFieldEditor {
    pub fn template_variables(&self) -> TemplateVariables {
        compute_template_variables(self.strategy, &self.definition, Some(&self.initial_value))
    }

    pub fn validate(&mut self) {
        self.error_status = self.strategy.validate(self.control.as_ref());
        trace!(
            field = %self.definition.identifier,
            status = %self.error_status,
            "time field validated"
        );
    }

    pub fn input_text(&self) -> String {
        self.control.value()
    }

    /// Seconds since midnight, or `None` when nothing usable was entered.
    pub fn field_value(&self) -> Option<u32> {
        match self.try_field_value() {
            Ok(value) => value,
            Err(err) => {
                debug!(field = %self.definition.identifier, %err, "time extraction failed");
                None
            }
        }
    }

    pub fn try_field_value(&self) -> Result<Option<u32>, ExtractionError> {
        self.strategy.extract_value(self.control.as_ref())
    }
}
