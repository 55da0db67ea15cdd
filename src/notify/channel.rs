//! Channel-backed notifier

use super::{Notification, Notifier};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Writes notifications into an mpsc channel drained by the app loop
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving end for the presenter
    pub fn channel() -> (Self, UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn notify(&self, notification: Notification) -> Result<()> {
        self.tx
            .send(notification)
            .map_err(|_| anyhow!("notification presenter is no longer listening"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notification_reaches_receiver() {
        let (notifier, mut rx) = ChannelNotifier::channel();
        notifier
            .notify(Notification::new("Saved", "body"))
            .await
            .unwrap();

        let received = rx.try_recv().unwrap();
        assert_eq!(received.title, "Saved");
        assert_eq!(received.description, "body");
    }

    #[test]
    fn test_notify_fails_when_receiver_dropped() {
        let (notifier, rx) = ChannelNotifier::channel();
        drop(rx);

        let result = tokio_test::block_on(notifier.notify(Notification::new("t", "d")));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_channel() {
        let (notifier, mut rx) = ChannelNotifier::channel();
        let clone = notifier.clone();
        notifier.notify(Notification::new("a", "")).await.unwrap();
        clone.notify(Notification::new("b", "")).await.unwrap();

        assert_eq!(rx.try_recv().unwrap().title, "a");
        assert_eq!(rx.try_recv().unwrap().title, "b");
    }
}
