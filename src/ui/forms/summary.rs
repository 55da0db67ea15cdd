//! Summary overlay for the committed snapshot

use crate::notify::Notifier;
use crate::state::FormController;
use crate::ui::components::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the submitted values centered over the form
pub fn draw<N: Notifier>(frame: &mut Frame, form: &FormController<N>) {
    let Some(values) = form.committed() else {
        return;
    };
    let Ok(json) = values.to_pretty_json() else {
        return;
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw("/"),
        Span::styled("Esc", key_style),
        Span::raw(" dismiss  "),
        Span::styled("y", key_style),
        Span::raw(" copy"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted values",
            title_color: Color::Green,
            border_color: Color::Green,
            message: &json,
            hint: Some(hint),
            max_width: 50,
        },
    );
}
