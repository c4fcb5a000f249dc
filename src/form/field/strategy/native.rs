use crate::domain::{FieldDefinition, Precision, TimeOfDay};
use crate::form::error::{BAD_INPUT_MESSAGE, ErrorStatus, ExtractionError, REQUIRED_MESSAGE};
use crate::form::field::components::{InputControl, SegmentedTimeControl};

use super::TimeInputStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTimeInput;

impl TimeInputStrategy for NativeTimeInput {
    fn supports_native_time_input(&self) -> bool {
        true
    }

    fn build_control(
        &self,
        definition: &FieldDefinition,
        display_text: &str,
    ) -> Box<dyn InputControl> {
        Box::new(SegmentedTimeControl::new(
            display_text,
            definition.is_required,
        ))
    }

    fn format_for_display(&self, seconds_since_midnight: u32, _use_seconds: bool) -> String {
        TimeOfDay::from_seconds(seconds_since_midnight).format(Precision::Seconds)
    }

    fn validate(&self, control: &dyn InputControl) -> ErrorStatus {
        let validity = control.validity();
        if validity.value_missing {
            ErrorStatus::invalid(REQUIRED_MESSAGE)
        } else if validity.bad_input {
            ErrorStatus::invalid(BAD_INPUT_MESSAGE)
        } else {
            ErrorStatus::Valid
        }
    }

    fn extract_value(
        &self,
        control: &dyn InputControl,
    ) -> Result<Option<u32>, ExtractionError> {
        match control.value_as_number() {
            Some(millis) => u32::try_from(millis / 1_000)
                .map(Some)
                .map_err(|_| ExtractionError::new(control.value(), "time is out of range")),
            None => Ok(None),
        }
    }
}
