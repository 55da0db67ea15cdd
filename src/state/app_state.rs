//! Application state definitions

use super::forms::FormController;
use super::toast_state::ToastState;
use crate::notify::ChannelNotifier;

/// Current route in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Static landing page
    #[default]
    Welcome,
    /// Contact form page
    Form,
}

impl View {
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::Form)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Welcome => "Welcome",
            View::Form => "Example Form",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Mounted while the form route is active, dropped when leaving it
    pub form: Option<FormController<ChannelNotifier>>,
    /// Toast currently on screen
    pub toast: Option<ToastState>,
}

impl AppState {
    pub fn is_summary_visible(&self) -> bool {
        self.form
            .as_ref()
            .is_some_and(|form| form.is_summary_visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContactValues, PhoneInputFilter};

    #[test]
    fn test_default_view_is_welcome() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Welcome);
        assert!(state.form.is_none());
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_is_form_view() {
        assert!(View::Form.is_form_view());
        assert!(!View::Welcome.is_form_view());
    }

    #[test]
    fn test_summary_hidden_without_form() {
        assert!(!AppState::default().is_summary_visible());
    }

    #[test]
    fn test_summary_hidden_for_fresh_form() {
        let (notifier, _rx) = ChannelNotifier::channel();
        let state = AppState {
            current_view: View::Form,
            form: Some(FormController::new(
                ContactValues::mount_defaults(),
                PhoneInputFilter::Advisory,
                notifier,
            )),
            toast: None,
        };
        assert!(!state.is_summary_visible());
    }
}
