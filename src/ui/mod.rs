//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod toast;
mod welcome;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

pub use toast::toast_travel;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Reserve the bottom line for the status bar
    let main_area = layout::create_layout(area);

    // Draw main content based on current view
    match app.state.current_view {
        View::Welcome => welcome::draw(frame, main_area),
        View::Form => {
            if let Some(form) = &app.state.form {
                forms::draw_contact_form(frame, main_area, form);
                if form.is_summary_visible() {
                    forms::draw_summary(frame, form);
                }
            }
        }
    }

    // Toast sits above everything except the status bar
    if let Some(toast) = &app.state.toast {
        toast::draw(frame, main_area, toast);
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .await
            .unwrap();
    }

    #[test]
    fn test_welcome_page() {
        let app = App::new(TuiConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Welcome to your new app!"));
        assert!(screen.contains("f/Enter:form"));
    }

    #[tokio::test]
    async fn test_form_page_shows_fields_and_defaults() {
        let mut app = App::new(TuiConfig::default());
        press(&mut app, KeyCode::Enter).await;

        let screen = render(&app);
        assert!(screen.contains("Example Form"));
        assert!(screen.contains("Name"));
        assert!(screen.contains("Phone Number"));
        assert!(screen.contains("John Doe"));
        assert!(screen.contains("Submit"));
    }

    #[tokio::test]
    async fn test_rejected_submit_shows_inline_message() {
        let mut app = App::new(TuiConfig::default());
        press(&mut app, KeyCode::Enter).await;
        press(&mut app, KeyCode::Enter).await;

        let screen = render(&app);
        assert!(screen.contains("Phone number must be at least 6 digits."));
        assert!(!screen.contains("You submitted"));
    }

    #[tokio::test]
    async fn test_successful_submit_shows_summary_and_toast() {
        let mut app = App::new(TuiConfig::default());
        press(&mut app, KeyCode::Enter).await;
        press(&mut app, KeyCode::Tab).await;
        for c in "5551234".chars() {
            press(&mut app, KeyCode::Char(c)).await;
        }
        press(&mut app, KeyCode::Enter).await;
        app.drain_notifications();
        app.update_toast(0);

        let screen = render(&app);
        assert!(screen.contains("Submitted values"));
        assert!(screen.contains("\"phoneNumber\": \"625551234\""));
        assert!(screen.contains("You submitted the following values:"));
    }

    #[tokio::test]
    async fn test_summary_shows_values_exactly_as_submitted() {
        let config = TuiConfig {
            default_name: Some("Ann    Lee".to_string()),
            default_phone_number: Some("123456".to_string()),
            ..Default::default()
        };
        let mut app = App::new(config);
        press(&mut app, KeyCode::Enter).await;
        press(&mut app, KeyCode::Enter).await;
        assert!(app.state.is_summary_visible());

        let screen = render(&app);
        assert!(screen.contains("\"name\": \"Ann    Lee\""));
        assert!(screen.contains("\"phoneNumber\": \"123456\""));
    }
}
