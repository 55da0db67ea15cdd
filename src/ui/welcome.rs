//! Welcome page rendering

use super::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HEADING: &str = "Welcome to your new app!";

/// Draw the static landing page
pub fn draw(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            HEADING,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Get started by pressing "),
            Span::styled(
                "f",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to open the form"),
        ]),
    ];

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let text_area = centered_rect(width, lines.len() as u16, area);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );
}
