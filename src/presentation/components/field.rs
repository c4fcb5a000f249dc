use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::form::field::components::{ControlKind, DisplaySegment};
use crate::form::{ErrorStatus, FieldEditor};

use super::super::view::UiContext;

const TEXT_HINT: &str = "  format: HH:MM or HH:MM:SS";
const SEGMENTED_HINT: &str = "  digits type • Up/Down adjust • Left/Right move";

pub fn render_field(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>, enable_cursor: bool) {
    let block = Block::default()
        .title(ctx.title.to_string())
        .borders(Borders::ALL);
    let inner = block.inner(area);
    let render = build_field_render(ctx.editor);
    frame.render_widget(Paragraph::new(render.lines).block(block), area);

    if enable_cursor {
        if let Some(cursor) = render.cursor_hint {
            let max_line = inner.height.saturating_sub(1);
            let max_column = inner.width.saturating_sub(1);
            let cursor_y = inner.y.saturating_add(cursor.line_offset.min(max_line));
            let cursor_x = inner.x.saturating_add(cursor.column.min(max_column));
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

pub(crate) struct FieldRender {
    pub lines: Vec<Line<'static>>,
    pub cursor_hint: Option<CursorHint>,
}

pub(crate) struct CursorHint {
    pub line_offset: u16,
    pub column: u16,
}

pub(crate) fn build_field_render(editor: &dyn FieldEditor) -> FieldRender {
    let definition = editor.definition();
    let mut lines = Vec::new();

    let mut label = definition.display_label();
    if definition.is_required {
        label.push_str(" *");
    }
    lines.push(Line::from(Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));

    if let Some(description) = &definition.description {
        lines.push(Line::from(Span::styled(
            format!("  {description}"),
            Style::default().fg(Color::Gray),
        )));
    }

    let control = editor.control();
    let segments = control.display_segments();
    let (panel, cursor_hint) = value_panel_lines(&segments, lines.len(), control.shows_cursor());
    lines.extend(panel);

    let hint = match control.kind() {
        ControlKind::Text => TEXT_HINT,
        ControlKind::SegmentedTime => SEGMENTED_HINT,
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    if let Some(line) = status_line(editor.error_status(), editor.is_dirty()) {
        lines.push(line);
    }

    FieldRender { lines, cursor_hint }
}

fn value_panel_lines(
    segments: &[DisplaySegment],
    first_line: usize,
    with_cursor: bool,
) -> (Vec<Line<'static>>, Option<CursorHint>) {
    let inner_width = segments
        .iter()
        .map(|segment| UnicodeWidthStr::width(segment.text.as_str()))
        .sum::<usize>();
    let typed_width = segments
        .iter()
        .filter(|segment| !segment.placeholder)
        .map(|segment| UnicodeWidthStr::width(segment.text.as_str()))
        .sum::<usize>();

    let border_style = Style::default().fg(Color::Yellow);
    let border_line = "─".repeat(inner_width.saturating_add(2));
    let mut spans = vec![Span::styled("│ ", border_style)];
    for segment in segments {
        spans.push(Span::styled(segment.text.clone(), segment_style(segment)));
    }
    spans.push(Span::styled(" │", border_style));

    let lines = vec![
        Line::from(Span::styled(format!("┌{border_line}┐"), border_style)),
        Line::from(spans),
        Line::from(Span::styled(format!("└{border_line}┘"), border_style)),
    ];

    let cursor_hint = with_cursor.then(|| CursorHint {
        line_offset: u16::try_from(first_line + 1).unwrap_or(u16::MAX),
        column: u16::try_from(typed_width + 2).unwrap_or(u16::MAX),
    });
    (lines, cursor_hint)
}

fn segment_style(segment: &DisplaySegment) -> Style {
    let base = if segment.placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };
    if segment.focused && !segment.placeholder {
        base.bg(Color::DarkGray)
    } else if segment.focused {
        base.add_modifier(Modifier::UNDERLINED)
    } else {
        base
    }
}

fn status_line(status: &ErrorStatus, dirty: bool) -> Option<Line<'static>> {
    match status {
        ErrorStatus::Invalid(message) => Some(Line::from(Span::styled(
            format!("  ✗ {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))),
        ErrorStatus::Valid => Some(Line::from(Span::styled(
            "  ✓ valid",
            Style::default().fg(Color::Green),
        ))),
        ErrorStatus::Unvalidated if dirty => Some(Line::from(Span::styled(
            "  • edited",
            Style::default().fg(Color::Yellow),
        ))),
        ErrorStatus::Unvalidated => None,
    }
}
