use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy)]
pub enum KeyCommand {
    Save,
    Quit,
    Blur,
    Edit(KeyEvent),
    None,
}

pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Save,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter | KeyCode::Esc => KeyCommand::Blur,
        _ => KeyCommand::Edit(*key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_chords_map_to_commands() {
        assert!(matches!(
            classify(&key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            KeyCommand::Save
        ));
        assert!(matches!(
            classify(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyCommand::Quit
        ));
        assert!(matches!(
            classify(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            KeyCommand::None
        ));
    }

    #[test]
    fn focus_keys_blur_the_control() {
        assert!(matches!(
            classify(&key(KeyCode::Tab, KeyModifiers::NONE)),
            KeyCommand::Blur
        ));
        assert!(matches!(
            classify(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            KeyCommand::Blur
        ));
        assert!(matches!(
            classify(&key(KeyCode::Esc, KeyModifiers::NONE)),
            KeyCommand::Blur
        ));
    }

    #[test]
    fn other_keys_edit() {
        assert!(matches!(
            classify(&key(KeyCode::Char('1'), KeyModifiers::NONE)),
            KeyCommand::Edit(_)
        ));
        assert!(matches!(
            classify(&key(KeyCode::Up, KeyModifiers::NONE)),
            KeyCommand::Edit(_)
        ));
    }
}
