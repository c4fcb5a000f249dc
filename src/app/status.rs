use crate::form::ErrorStatus;

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Press Ctrl+S to validate and save.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn validated(&mut self, status: &ErrorStatus) {
        self.message = match status.message() {
            Some(message) => format!("Invalid: {message}"),
            None => "Validation passed".to_string(),
        };
    }

    pub fn blocked(&mut self, message: &str) {
        self.message = format!("Cannot save: {message}");
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsaved changes. Press Ctrl+Q again to quit without saving.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
