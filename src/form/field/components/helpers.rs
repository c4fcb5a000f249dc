use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(crate) fn handle_text_edit(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            if buffer.is_empty() {
                return false;
            }
            buffer.clear();
            true
        }
        _ => false,
    }
}

pub(crate) fn is_plain_digit(key: &KeyEvent) -> Option<u8> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => ch.to_digit(10).and_then(|digit| u8::try_from(digit).ok()),
        _ => None,
    }
}
