mod manual;
mod native;

use std::fmt;

use crate::domain::FieldDefinition;
use crate::form::error::{ErrorStatus, ExtractionError};

use super::components::InputControl;

pub use manual::ManualTimeInput;
pub use native::NativeTimeInput;

/// Capability-specific handling of a time field.
///
/// One implementation is picked when the editor is built and used for
/// every later call; nothing else branches on the capability.
pub trait TimeInputStrategy: fmt::Debug + Sync {
    fn supports_native_time_input(&self) -> bool;

    fn build_control(
        &self,
        definition: &FieldDefinition,
        display_text: &str,
    ) -> Box<dyn InputControl>;

    fn format_for_display(&self, seconds_since_midnight: u32, use_seconds: bool) -> String;

    fn validate(&self, control: &dyn InputControl) -> ErrorStatus;

    /// `Ok(None)` means there is nothing to extract, which is not an error.
    fn extract_value(&self, control: &dyn InputControl)
    -> Result<Option<u32>, ExtractionError>;
}

static NATIVE: NativeTimeInput = NativeTimeInput;
static MANUAL: ManualTimeInput = ManualTimeInput;

pub fn strategy_for(supports_native_time_input: bool) -> &'static dyn TimeInputStrategy {
    if supports_native_time_input {
        &NATIVE
    } else {
        &MANUAL
    }
}
