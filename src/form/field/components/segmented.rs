use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::base::{ControlKind, DisplaySegment, InputControl, ValidityState};
use super::helpers::is_plain_digit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind {
    Hours,
    Minutes,
    Seconds,
}

impl SegmentKind {
    fn max(self) -> u8 {
        match self {
            SegmentKind::Hours => 23,
            SegmentKind::Minutes | SegmentKind::Seconds => 59,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            SegmentKind::Hours => "HH",
            SegmentKind::Minutes => "MM",
            SegmentKind::Seconds => "SS",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    kind: SegmentKind,
    value: Option<u8>,
    typed_digits: u8,
}

impl Segment {
    fn new(kind: SegmentKind) -> Self {
        Self {
            kind,
            value: None,
            typed_digits: 0,
        }
    }

    fn clear(&mut self) -> bool {
        self.typed_digits = 0;
        self.value.take().is_some()
    }

    fn step(&mut self, delta: i32) {
        let modulus = i32::from(self.kind.max()) + 1;
        let next = match self.value {
            Some(current) => (i32::from(current) + delta).rem_euclid(modulus),
            None if delta >= 0 => 0,
            None => modulus - 1,
        };
        self.value = u8::try_from(next).ok();
        self.typed_digits = 0;
    }

    /// Returns `true` once the segment cannot take another digit.
    fn type_digit(&mut self, digit: u8) -> bool {
        let max = self.kind.max();
        if self.typed_digits == 0 {
            self.value = Some(digit);
            if digit * 10 > max {
                return true;
            }
            self.typed_digits = 1;
            return false;
        }
        let combined = self.value.unwrap_or(0) * 10 + digit;
        self.value = Some(combined.min(max));
        self.typed_digits = 0;
        true
    }

    fn parse(&mut self, raw: &str) -> bool {
        self.clear();
        if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match raw.parse::<u8>() {
            Ok(value) if value <= self.kind.max() => {
                self.value = Some(value);
                true
            }
            _ => false,
        }
    }
}

/// Hour/minute/second spinner that parses and validates time on its own.
///
/// Seconds may stay blank; hours and minutes must both be set for the
/// control to hold a value. Anything in between is reported as bad input.
#[derive(Debug, Clone)]
pub struct SegmentedTimeControl {
    segments: [Segment; 3],
    focus: usize,
    required: bool,
    rejected: bool,
}

impl SegmentedTimeControl {
    pub fn new(initial: &str, required: bool) -> Self {
        let mut control = Self {
            segments: [
                Segment::new(SegmentKind::Hours),
                Segment::new(SegmentKind::Minutes),
                Segment::new(SegmentKind::Seconds),
            ],
            focus: 0,
            required,
            rejected: false,
        };
        control.set_value(initial);
        control
    }

    pub fn focused_segment(&self) -> usize {
        self.focus
    }

    fn hours(&self) -> Option<u8> {
        self.segments[0].value
    }

    fn minutes(&self) -> Option<u8> {
        self.segments[1].value
    }

    fn seconds(&self) -> Option<u8> {
        self.segments[2].value
    }

    fn is_complete(&self) -> bool {
        self.hours().is_some() && self.minutes().is_some()
    }

    fn is_blank(&self) -> bool {
        self.segments.iter().all(|segment| segment.value.is_none())
    }

    fn move_focus(&mut self, delta: i32) {
        let last = self.segments.len() - 1;
        self.focus = match delta {
            d if d < 0 => self.focus.saturating_sub(1),
            _ => (self.focus + 1).min(last),
        };
        self.segments[self.focus].typed_digits = 0;
    }

    fn touched(&mut self) -> bool {
        self.rejected = false;
        true
    }
}

impl InputControl for SegmentedTimeControl {
    fn kind(&self) -> ControlKind {
        ControlKind::SegmentedTime
    }

    fn value(&self) -> String {
        match (self.hours(), self.minutes(), self.seconds()) {
            (Some(h), Some(m), Some(s)) => format!("{h:02}:{m:02}:{s:02}"),
            (Some(h), Some(m), None) => format!("{h:02}:{m:02}"),
            _ => String::new(),
        }
    }

    fn validity(&self) -> ValidityState {
        let blank = self.is_blank() && !self.rejected;
        ValidityState {
            value_missing: self.required && blank,
            bad_input: self.rejected || (!blank && !self.is_complete()),
            pattern_mismatch: false,
        }
    }

    fn value_as_number(&self) -> Option<u64> {
        if self.rejected {
            return None;
        }
        match (self.hours(), self.minutes()) {
            (Some(h), Some(m)) => {
                let s = self.seconds().unwrap_or(0);
                let total = u64::from(h) * 3_600 + u64::from(m) * 60 + u64::from(s);
                Some(total * 1_000)
            }
            _ => None,
        }
    }

    fn set_value(&mut self, raw: &str) {
        self.focus = 0;
        self.rejected = false;
        for segment in &mut self.segments {
            segment.clear();
        }
        if raw.is_empty() {
            return;
        }
        let parts = raw.split(':').collect::<Vec<_>>();
        if parts.len() < 2 || parts.len() > self.segments.len() {
            self.rejected = true;
            return;
        }
        for (segment, part) in self.segments.iter_mut().zip(parts) {
            if !segment.parse(part) {
                self.rejected = true;
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(digit) = is_plain_digit(key) {
            if self.segments[self.focus].type_digit(digit) && self.focus + 1 < self.segments.len()
            {
                self.focus += 1;
            }
            return self.touched();
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Up => {
                self.segments[self.focus].step(1);
                self.touched()
            }
            KeyCode::Down => {
                self.segments[self.focus].step(-1);
                self.touched()
            }
            KeyCode::Left => {
                self.move_focus(-1);
                false
            }
            KeyCode::Right | KeyCode::Char(':') => {
                self.move_focus(1);
                false
            }
            KeyCode::Backspace => {
                if self.segments[self.focus].clear() {
                    return self.touched();
                }
                self.move_focus(-1);
                false
            }
            KeyCode::Delete => {
                let mut changed = self.rejected;
                for segment in &mut self.segments {
                    changed |= segment.clear();
                }
                self.focus = 0;
                if changed {
                    return self.touched();
                }
                false
            }
            _ => false,
        }
    }

    fn display_segments(&self) -> Vec<DisplaySegment> {
        let mut parts = Vec::with_capacity(self.segments.len() * 2);
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                parts.push(DisplaySegment::plain(":"));
            }
            let (text, placeholder) = match segment.value {
                Some(value) => (format!("{value:02}"), false),
                None => (segment.kind.placeholder().to_string(), true),
            };
            parts.push(DisplaySegment {
                text,
                focused: idx == self.focus,
                placeholder,
            });
        }
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(control: &mut SegmentedTimeControl, code: KeyCode) -> bool {
        control.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(control: &mut SegmentedTimeControl, text: &str) {
        for ch in text.chars() {
            press(control, KeyCode::Char(ch));
        }
    }

    #[test]
    fn seeds_from_formatted_time() {
        let control = SegmentedTimeControl::new("14:30:45", false);
        assert_eq!(control.value(), "14:30:45");
        assert_eq!(control.value_as_number(), Some(52_245_000));
        assert!(control.validity().is_valid());
    }

    #[test]
    fn typing_digits_advances_segments() {
        let mut control = SegmentedTimeControl::new("", true);
        type_text(&mut control, "1430");
        assert_eq!(control.value(), "14:30");
        assert_eq!(control.focused_segment(), 2);
        type_text(&mut control, "45");
        assert_eq!(control.value(), "14:30:45");
    }

    #[test]
    fn large_leading_digit_completes_segment() {
        let mut control = SegmentedTimeControl::new("", false);
        type_text(&mut control, "7");
        assert_eq!(control.focused_segment(), 1);
        type_text(&mut control, "9");
        assert_eq!(control.focused_segment(), 2);
        assert_eq!(control.value(), "07:09");
    }

    #[test]
    fn typed_values_clamp_to_segment_range() {
        let mut control = SegmentedTimeControl::new("", false);
        type_text(&mut control, "29");
        assert_eq!(control.display_segments()[0].text, "23");
    }

    #[test]
    fn partial_entry_is_bad_input() {
        let mut control = SegmentedTimeControl::new("", true);
        type_text(&mut control, "14");
        let validity = control.validity();
        assert!(validity.bad_input);
        assert!(!validity.value_missing);
        assert_eq!(control.value(), "");
        assert_eq!(control.value_as_number(), None);
    }

    #[test]
    fn arrows_step_with_wrap() {
        let mut control = SegmentedTimeControl::new("", false);
        assert!(press(&mut control, KeyCode::Down));
        assert_eq!(control.display_segments()[0].text, "23");
        assert!(press(&mut control, KeyCode::Up));
        assert_eq!(control.display_segments()[0].text, "00");
        press(&mut control, KeyCode::Right);
        press(&mut control, KeyCode::Up);
        assert_eq!(control.value(), "00:00");
        assert_eq!(control.value_as_number(), Some(0));
    }

    #[test]
    fn rejects_unparseable_programmatic_values() {
        let mut control = SegmentedTimeControl::new("", false);
        control.set_value("25:00");
        assert!(control.validity().bad_input);
        assert_eq!(control.value_as_number(), None);
        control.set_value("14:3x");
        assert!(control.validity().bad_input);
        control.set_value("garbage");
        assert!(control.validity().bad_input);
        control.set_value("");
        assert!(control.validity().is_valid());
    }

    #[test]
    fn delete_clears_everything() {
        let mut control = SegmentedTimeControl::new("08:15", true);
        assert!(press(&mut control, KeyCode::Delete));
        assert!(control.validity().value_missing);
        assert!(!press(&mut control, KeyCode::Delete));
    }

    #[test]
    fn backspace_on_empty_segment_moves_back() {
        let mut control = SegmentedTimeControl::new("08:15", false);
        press(&mut control, KeyCode::Right);
        press(&mut control, KeyCode::Right);
        assert!(!press(&mut control, KeyCode::Backspace));
        assert_eq!(control.focused_segment(), 1);
        assert!(press(&mut control, KeyCode::Backspace));
        assert!(control.validity().bad_input);
    }
}
