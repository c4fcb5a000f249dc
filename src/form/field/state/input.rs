use crossterm::event::KeyEvent;

use crate::form::events::{EditorAction, FieldEvent};

use super::TimeFieldEditor;

impl TimeFieldEditor {
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.control.handle_key(key) {
            self.after_edit();
            true
        } else {
            false
        }
    }

    /// Replaces the control's contents, as a host or paste would.
    pub fn set_input_text(&mut self, text: &str) {
        self.control.set_value(text);
        self.after_edit();
    }

    pub fn blur(&mut self) {
        self.dispatch(FieldEvent::Blur);
    }

    pub fn dispatch(&mut self, event: FieldEvent) {
        for action in self.bindings.actions_for(event) {
            match action {
                EditorAction::Validate => self.validate(),
            }
        }
    }

    fn after_edit(&mut self) {
        self.dirty = true;
        self.dispatch(FieldEvent::ValueChange);
    }
}
