//! Toast presenter animation state

use crate::notify::Notification;
use std::time::{Duration, Instant};

/// Animation phase for a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Toast sliding in from the right edge
    SlideIn,
    /// Toast resting in place
    Display,
    /// Toast expired or closed
    Complete,
}

/// A single visible toast with its animation state
#[derive(Debug)]
pub struct ToastState {
    pub notification: Notification,
    /// When the toast was first shown
    pub start_time: Instant,
    /// Current animation phase
    pub phase: ToastPhase,
    /// Columns the toast is still shifted to the right
    pub slide_offset: f32,
    display_duration: Duration,
}

impl ToastState {
    /// Duration of the slide-in animation
    const SLIDE_DURATION: Duration = Duration::from_millis(250);
    /// Default time a toast stays on screen after sliding in
    pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_millis(5000);

    pub fn new(notification: Notification, display_duration: Duration) -> Self {
        Self {
            notification,
            start_time: Instant::now(),
            phase: ToastPhase::SlideIn,
            slide_offset: f32::MAX,
            display_duration,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, travel: u16) {
        self.update_at(self.start_time.elapsed(), travel);
    }

    /// Update animation state for a given elapsed time.
    /// `travel` is how far (in columns) the toast moves while sliding in.
    pub fn update_at(&mut self, elapsed: Duration, travel: u16) {
        if self.phase == ToastPhase::Complete {
            return;
        }

        if elapsed < Self::SLIDE_DURATION {
            self.phase = ToastPhase::SlideIn;
            let progress = elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
            let eased = simple_easing::cubic_out(progress);
            self.slide_offset = (1.0 - eased) * travel as f32;
        } else if elapsed < Self::SLIDE_DURATION + self.display_duration {
            self.phase = ToastPhase::Display;
            self.slide_offset = 0.0;
        } else {
            self.phase = ToastPhase::Complete;
        }
    }

    /// Close the toast early (user pressed a key)
    pub fn close(&mut self) {
        self.phase = ToastPhase::Complete;
    }

    pub fn is_animating(&self) -> bool {
        self.phase == ToastPhase::SlideIn
    }

    pub fn is_complete(&self) -> bool {
        self.phase == ToastPhase::Complete
    }
}
