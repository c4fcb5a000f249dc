use std::fmt;

use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Segmented hour/minute/second spinner with its own parsing.
    SegmentedTime,
    /// Plain text checked against the `HH:MM(:SS)` pattern.
    Text,
}

/// Built-in validity signal of a rendered control.
///
/// `value_missing` already accounts for whether the field is required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub bad_input: bool,
    pub pattern_mismatch: bool,
}

impl ValidityState {
    pub fn is_valid(&self) -> bool {
        !(self.value_missing || self.bad_input || self.pattern_mismatch)
    }
}

/// One run of text in a rendered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySegment {
    pub text: String,
    pub focused: bool,
    pub placeholder: bool,
}

impl DisplaySegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            focused: false,
            placeholder: false,
        }
    }
}

pub trait InputControl: InputControlClone + fmt::Debug {
    fn kind(&self) -> ControlKind;

    /// Current value as the control reports it; empty when nothing usable
    /// was entered.
    fn value(&self) -> String;

    fn validity(&self) -> ValidityState;

    /// Milliseconds since midnight, for controls that parse time natively.
    fn value_as_number(&self) -> Option<u64> {
        None
    }

    fn set_value(&mut self, raw: &str);

    /// Returns `true` when the key changed the value.
    fn handle_key(&mut self, key: &KeyEvent) -> bool;

    fn display_segments(&self) -> Vec<DisplaySegment>;

    fn shows_cursor(&self) -> bool {
        false
    }
}

pub trait InputControlClone {
    fn clone_box(&self) -> Box<dyn InputControl>;
}

impl<T> InputControlClone for T
where
    T: 'static + InputControl + Clone,
{
    fn clone_box(&self) -> Box<dyn InputControl> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn InputControl> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
