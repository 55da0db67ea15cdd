//! Contact form rendering

use super::field_renderer::{draw_feedback, draw_field, feedback_rows};
use crate::notify::Notifier;
use crate::state::{Form, FormController};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card width including borders
const CARD_WIDTH: u16 = 52;
/// Input height (top border + content + bottom border)
const INPUT_HEIGHT: u16 = 3;

/// Draw the form card with its fields and submit button
pub fn draw<N: Notifier>(frame: &mut Frame, area: Rect, form: &FormController<N>) {
    let schema = form.schema();

    let mut constraints = vec![
        Constraint::Length(1), // Description
        Constraint::Length(1), // Spacing
    ];
    for spec in schema.fields {
        constraints.push(Constraint::Length(INPUT_HEIGHT));
        constraints.push(Constraint::Length(feedback_rows(
            form.messages_for(spec.id),
            form.keystroke_hint(spec.id),
        )));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit

    let inner_height: u16 = constraints
        .iter()
        .map(|c| match c {
            Constraint::Length(n) => *n,
            _ => 0,
        })
        .sum();
    let card = centered_rect(CARD_WIDTH, inner_height + 2, area);

    let block = Block::default()
        .title(" Example Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        Paragraph::new("Validated against a static field schema")
            .style(Style::default().fg(Color::DarkGray)),
        chunks[0],
    );

    for (idx, spec) in schema.fields.iter().enumerate() {
        let messages = form.messages_for(spec.id);
        draw_field(
            frame,
            chunks[2 + idx * 2],
            spec,
            form.value_of(spec.id),
            form.active_field() == idx,
            !messages.is_empty(),
        );
        draw_feedback(
            frame,
            chunks[3 + idx * 2],
            messages,
            form.keystroke_hint(spec.id),
        );
    }

    let button_row = chunks[2 + schema.len() * 2];
    let button_area = Rect {
        width: 12.min(button_row.width),
        ..button_row
    };
    render_button(
        frame,
        button_area,
        "Submit",
        form.is_submit_active(),
        !form.is_summary_visible(),
    );
}
