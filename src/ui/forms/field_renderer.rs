//! Field rendering utilities for forms

use crate::state::FieldSpec;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows needed under an input for its messages and hint
pub fn feedback_rows(messages: &[String], hint: Option<&str>) -> u16 {
    messages.len() as u16 + u16::from(hint.is_some())
}

/// Draw a single-line input for a schema field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    value: &str,
    is_active: bool,
    has_error: bool,
) {
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let value_span = if value.is_empty() {
        Span::styled(spec.placeholder, Style::default().fg(Color::DarkGray))
    } else if is_active {
        Span::styled(value, Style::default().fg(Color::Cyan))
    } else {
        Span::styled(value, Style::default().fg(Color::White))
    };

    // Cursor goes before the placeholder so it reads as an empty input
    let line = if value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            value_span,
        ])
    } else {
        Line::from(vec![
            value_span,
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", spec.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw validation messages (red) and an advisory hint (yellow) under a field
pub fn draw_feedback(frame: &mut Frame, area: Rect, messages: &[String], hint: Option<&str>) {
    if area.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = messages
        .iter()
        .map(|m| Line::from(Span::styled(m.as_str(), Style::default().fg(Color::Red))))
        .collect();
    if let Some(hint) = hint {
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_rows() {
        assert_eq!(feedback_rows(&[], None), 0);
        assert_eq!(feedback_rows(&["a".to_string()], None), 1);
        assert_eq!(feedback_rows(&["a".to_string()], Some("Digits only")), 2);
    }
}
