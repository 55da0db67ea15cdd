//! Application state and core logic

use crate::config::TuiConfig;
use crate::notify::{ChannelNotifier, Notification};
use crate::state::{AppState, Form, FormController, SubmitOutcome, ToastState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Handed to every mounted form
    notifier: ChannelNotifier,
    /// Receiving end drained into the toast presenter
    notifications: UnboundedReceiver<Notification>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        let (notifier, notifications) = ChannelNotifier::channel();
        Self {
            state: AppState::default(),
            config,
            notifier,
            notifications,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a route. Entering the form mounts a fresh form,
    /// leaving it drops the form state.
    pub fn navigate(&mut self, view: View) {
        if view == self.state.current_view {
            return;
        }
        debug!(from = ?self.state.current_view, to = ?view, "Navigating");

        self.state.form = if view.is_form_view() {
            Some(FormController::new(
                self.config.mount_values(),
                self.config.phone_filter(),
                self.notifier.clone(),
            ))
        } else {
            None
        };
        self.copy_message = None;
        self.state.current_view = view;
    }

    /// Move queued notifications into the toast presenter; the newest wins
    pub fn drain_notifications(&mut self) {
        while let Ok(notification) = self.notifications.try_recv() {
            self.state.toast = Some(ToastState::new(
                notification,
                self.config.toast_duration(),
            ));
        }
    }

    /// Advance the toast animation, removing it once it has expired
    pub fn update_toast(&mut self, travel: u16) {
        if let Some(ref mut toast) = self.state.toast {
            toast.update(travel);
            if toast.is_complete() {
                self.state.toast = None;
            }
        }
    }

    /// Whether the draw loop should poll at animation speed
    pub fn is_animating(&self) -> bool {
        self.state.toast.as_ref().is_some_and(ToastState::is_animating)
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }
        // Ctrl+X closes the toast from anywhere, including while typing
        if key.code == KeyCode::Char('x') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.close_toast();
            return Ok(());
        }

        match self.state.current_view {
            View::Welcome => self.handle_welcome_key(key),
            View::Form if self.state.is_summary_visible() => self.handle_summary_key(key)?,
            View::Form => self.handle_form_key(key).await,
        }

        Ok(())
    }

    /// Handle keys on the welcome page
    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('f') | KeyCode::Enter => self.navigate(View::Form),
            KeyCode::Char('x') => self.close_toast(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys while the form is being edited
    async fn handle_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.navigate(View::Welcome);
            return;
        }

        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Self::submit(form).await;
            }
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                Self::submit(form).await;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.clear_active();
            }
            // Enter submits from any field, like a browser form
            KeyCode::Enter => Self::submit(form).await,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Backspace => {
                form.pop_char();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                form.push_char(c);
            }
            _ => {}
        }
    }

    async fn submit(form: &mut FormController<ChannelNotifier>) {
        if let SubmitOutcome::Rejected(errors) = form.submit().await {
            for error in errors.iter() {
                debug!("Rejected {error}");
            }
        }
    }

    /// Handle keys while the summary overlay is shown
    fn handle_summary_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                if let Some(form) = self.state.form.as_mut() {
                    form.dismiss();
                }
                self.copy_message = None;
            }
            KeyCode::Char('y') => self.copy_summary(),
            KeyCode::Char('x') => self.close_toast(),
            _ => {}
        }
        Ok(())
    }

    fn close_toast(&mut self) {
        if let Some(ref mut toast) = self.state.toast {
            toast.close();
        }
    }

    /// Pretty JSON of the committed snapshot, if any
    pub fn summary_json(&self) -> Option<String> {
        let committed = self.state.form.as_ref()?.committed()?;
        committed.to_pretty_json().ok()
    }

    /// Copy the submitted values to the clipboard
    fn copy_summary(&mut self) {
        let Some(text) = self.summary_json() else {
            return;
        };
        match self.copy_to_clipboard(&text) {
            Ok(()) => self.copy_message = Some(copied_message(&text)),
            Err(e) => {
                warn!("Clipboard copy failed: {e}");
                self.copy_message = Some("Copy failed".to_string());
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

fn copied_message(text: &str) -> String {
    format!("Copied {} chars", text.chars().count())
}
