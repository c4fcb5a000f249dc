use std::sync::LazyLock;

use crossterm::event::KeyEvent;
use regex::Regex;

use super::base::{ControlKind, DisplaySegment, InputControl, ValidityState};
use super::helpers::handle_text_edit;
use crate::domain::Precision;

/// `HH:MM` or `HH:MM:SS`; hour, minute and second ranges are not checked.
pub const TIME_PATTERN: &str = r"^[0-9]{1,2}:[0-9]{2}(:[0-9]{2})?$";

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIME_PATTERN).expect("time pattern must compile"));

pub fn matches_time_pattern(text: &str) -> bool {
    TIME_REGEX.is_match(text)
}

/// Free-text time entry used when no segmented control is available.
#[derive(Debug, Clone)]
pub struct TextTimeControl {
    buffer: String,
    required: bool,
    precision: Precision,
}

impl TextTimeControl {
    pub fn new(initial: &str, required: bool, precision: Precision) -> Self {
        Self {
            buffer: initial.to_string(),
            required,
            precision,
        }
    }
}

impl InputControl for TextTimeControl {
    fn kind(&self) -> ControlKind {
        ControlKind::Text
    }

    fn value(&self) -> String {
        self.buffer.clone()
    }

    fn validity(&self) -> ValidityState {
        let empty = self.buffer.is_empty();
        ValidityState {
            value_missing: self.required && empty,
            bad_input: false,
            pattern_mismatch: !empty && !matches_time_pattern(&self.buffer),
        }
    }

    fn set_value(&mut self, raw: &str) {
        self.buffer = raw.to_string();
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        handle_text_edit(&mut self.buffer, key)
    }

    fn display_segments(&self) -> Vec<DisplaySegment> {
        if self.buffer.is_empty() {
            return vec![DisplaySegment {
                text: self.precision.placeholder().to_string(),
                focused: false,
                placeholder: true,
            }];
        }
        vec![DisplaySegment {
            text: self.buffer.clone(),
            focused: true,
            placeholder: false,
        }]
    }

    fn shows_cursor(&self) -> bool {
        true
    }
}
