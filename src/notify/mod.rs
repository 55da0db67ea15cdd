//! Notification delivery from the form to the toast presenter

mod channel;
mod notification;
mod traits;

pub use channel::ChannelNotifier;
pub use notification::Notification;
#[cfg(test)]
pub use traits::MockNotifier;
pub use traits::Notifier;
