use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::form::ErrorStatus;

use super::super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let actions = ctx.help.unwrap_or(" ");
    let actions_widget = Paragraph::new(format!("Actions: {actions}"))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(actions_widget, rows[0]);

    let mut status = ctx.status_message.to_string();
    if ctx.dirty {
        status.push_str(" • unsaved changes");
    }
    if status.trim().is_empty() {
        status = "Ready".to_string();
    }

    let badge = match ctx.editor.error_status() {
        ErrorStatus::Invalid(_) => Span::styled(
            "[! invalid]",
            Style::default().fg(Color::Red).bg(Color::Black),
        ),
        ErrorStatus::Valid => Span::styled("[ok]", Style::default().fg(Color::Green)),
        ErrorStatus::Unvalidated => Span::styled("[--]", Style::default().fg(Color::DarkGray)),
    };

    let status_widget = Paragraph::new(ratatui::text::Line::from(vec![
        Span::raw("Status: "),
        Span::raw(status),
        Span::raw(" "),
        badge,
    ]))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(status_widget, rows[1]);
}
