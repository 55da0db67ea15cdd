//! Trait abstraction for notification delivery to enable mocking in tests

use super::Notification;
use anyhow::Result;
use async_trait::async_trait;

/// Receives user-visible notifications emitted by the form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Hand a notification to the presenter
    async fn notify(&self, notification: Notification) -> Result<()>;
}
