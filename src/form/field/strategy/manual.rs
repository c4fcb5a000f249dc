use std::ops::RangeInclusive;

use crate::domain::{FieldDefinition, Precision, TimeOfDay};
use crate::form::error::{ErrorStatus, ExtractionError, PATTERN_MESSAGE, REQUIRED_MESSAGE};
use crate::form::field::components::{InputControl, TextTimeControl};

use super::TimeInputStrategy;

const HOUR_WIDTH: RangeInclusive<usize> = 1..=2;
const PART_WIDTH: RangeInclusive<usize> = 2..=2;

#[derive(Debug, Clone, Copy, Default)]
pub struct ManualTimeInput;

impl TimeInputStrategy for ManualTimeInput {
    fn supports_native_time_input(&self) -> bool {
        false
    }

    fn build_control(
        &self,
        definition: &FieldDefinition,
        display_text: &str,
    ) -> Box<dyn InputControl> {
        Box::new(TextTimeControl::new(
            display_text,
            definition.is_required,
            Precision::from_use_seconds(definition.use_seconds()),
        ))
    }

    fn format_for_display(&self, seconds_since_midnight: u32, use_seconds: bool) -> String {
        TimeOfDay::from_seconds(seconds_since_midnight)
            .format(Precision::from_use_seconds(use_seconds))
    }

    fn validate(&self, control: &dyn InputControl) -> ErrorStatus {
        let validity = control.validity();
        if validity.value_missing {
            ErrorStatus::invalid(REQUIRED_MESSAGE)
        } else if validity.pattern_mismatch {
            ErrorStatus::invalid(PATTERN_MESSAGE)
        } else {
            ErrorStatus::Valid
        }
    }

    // No range check here: "25:00" extracts to 90000.
    fn extract_value(
        &self,
        control: &dyn InputControl,
    ) -> Result<Option<u32>, ExtractionError> {
        let raw = control.value();
        let parts = raw.split(':').collect::<Vec<_>>();
        if parts.len() < 2 {
            return Ok(None);
        }
        if parts.len() > 3 {
            return Err(ExtractionError::new(
                raw.as_str(),
                "expected at most three components",
            ));
        }
        let hours = component(&raw, parts[0], HOUR_WIDTH, "hours")?;
        let minutes = component(&raw, parts[1], PART_WIDTH, "minutes")?;
        let seconds = match parts.get(2) {
            Some(part) => component(&raw, part, PART_WIDTH, "seconds")?,
            None => 0,
        };
        Ok(Some(hours * 3_600 + minutes * 60 + seconds))
    }
}

fn component(
    raw: &str,
    part: &str,
    width: RangeInclusive<usize>,
    label: &str,
) -> Result<u32, ExtractionError> {
    if !width.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExtractionError::new(
            raw,
            format!("'{part}' is not a valid {label} component"),
        ));
    }
    part.parse::<u32>()
        .map_err(|_| ExtractionError::new(raw, format!("'{part}' is not a valid {label} component")))
}
