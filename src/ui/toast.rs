//! Toast overlay rendering

use crate::state::ToastState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum toast width including borders
const TOAST_WIDTH: u16 = 42;

/// Distance the toast travels while sliding in from the right edge
pub fn toast_travel(terminal_width: u16) -> u16 {
    (TOAST_WIDTH + 1).min(terminal_width)
}

/// Draw the toast in the bottom-right corner of `area`
pub fn draw(frame: &mut Frame, area: Rect, toast: &ToastState) {
    let notification = &toast.notification;
    let description: Vec<&str> = notification.description.lines().collect();

    let width = TOAST_WIDTH.min(area.width);
    // borders + title + description
    let height = (description.len() as u16 + 3).min(area.height);

    let offset = toast.slide_offset.max(0.0) as u16;
    let resting_x = area.x + area.width.saturating_sub(width + 1);
    let x = resting_x.saturating_add(offset);
    if x >= area.x + area.width {
        return;
    }

    let toast_area = Rect {
        x,
        y: area.y + area.height.saturating_sub(height),
        // Clip whatever has not slid on screen yet
        width: width.min(area.x + area.width - x),
        height,
    };

    let mut lines = vec![Line::from(Span::styled(
        notification.title.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(description.into_iter().map(|line| {
        Line::from(Span::styled(line, Style::default().fg(Color::Gray)))
    }));

    frame.render_widget(Clear, toast_area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", notification.issued_at.format("%H:%M:%S")))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        ),
        toast_area,
    );
}
