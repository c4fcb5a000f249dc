use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    form::FieldEditor,
    presentation::{self, UiContext},
};

use super::{
    input::{KeyCommand, classify},
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

const HELP_TEXT: &str = "Tab/Esc/Enter check • Ctrl+S save • Ctrl+Q quit";

pub(crate) struct App {
    title: String,
    editor: Box<dyn FieldEditor>,
    options: UiOptions,
    status: StatusLine,
    exit_armed: bool,
    should_quit: bool,
    result: Option<Value>,
}

impl App {
    pub fn new(title: String, editor: Box<dyn FieldEditor>, options: UiOptions) -> Self {
        Self {
            title,
            editor,
            options,
            status: StatusLine::new(),
            exit_armed: false,
            should_quit: false,
            result: None,
        }
    }

    pub fn run(&mut self) -> Result<Value> {
        let outcome = self.event_loop();
        self.finish(outcome)
    }

    fn finish(&mut self, outcome: Result<()>) -> Result<Value> {
        self.editor.teardown();
        outcome?;
        self.result
            .take()
            .ok_or_else(|| anyhow!("user exited without saving"))
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::FocusLost => self.on_blur(),
                Event::Resize(_, _) | Event::Mouse(_) => {}
                Event::FocusGained | Event::Paste(_) => {}
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = if self.options.show_help {
            Some(HELP_TEXT)
        } else {
            None
        };
        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                editor: self.editor.as_ref(),
                status_message: self.status.message(),
                dirty: self.editor.is_dirty(),
                help,
            },
        );
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match classify(&key) {
            KeyCommand::Save => {
                self.exit_armed = false;
                self.on_save();
            }
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::Blur => {
                self.exit_armed = false;
                self.on_blur();
            }
            KeyCommand::Edit(key) => {
                if self.editor.handle_key(&key) {
                    self.exit_armed = false;
                    self.status
                        .editing(&self.editor.definition().display_label());
                }
            }
            KeyCommand::None => {}
        }
    }

    fn on_blur(&mut self) {
        self.editor.blur();
        self.status.validated(self.editor.error_status());
    }

    fn on_save(&mut self) {
        self.editor.validate();
        if let Some(message) = self.editor.error_status().message() {
            debug!(%message, "submission blocked");
            self.status.blocked(message);
            return;
        }
        let value = self.editor.field_value();
        info!(
            field = %self.editor.definition().identifier,
            value = %value,
            "field submitted"
        );
        self.result = Some(value);
        self.should_quit = true;
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.editor.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }

    #[cfg(test)]
    pub(crate) fn status_message(&self) -> &str {
        self.status.message()
    }

    #[cfg(test)]
    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub(crate) fn take_result(&mut self) -> Option<Value> {
        self.result.take()
    }
}
