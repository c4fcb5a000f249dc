use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::form::FieldEditor;

use super::components::{render_field, render_footer};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub editor: &'a dyn FieldEditor,
    pub status_message: &'a str,
    pub dirty: bool,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4)])
        .split(frame.area());

    render_field(frame, chunks[0], &ctx, true);
    render_footer(frame, chunks[1], &ctx);
}
