//! Notification payload

use crate::state::ContactValues;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A titled message for the toast presenter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    /// Title used for successful form submissions
    pub const SUBMITTED_TITLE: &'static str = "You submitted the following values:";

    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            issued_at: Utc::now(),
        }
    }

    /// Build the notification for a successful submission, embedding the
    /// values as pretty-printed JSON
    pub fn submitted(values: &ContactValues) -> serde_json::Result<Self> {
        Ok(Self::new(Self::SUBMITTED_TITLE, values.to_pretty_json()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_embeds_values() {
        let values = ContactValues::new("Alice", "123456");
        let notification = Notification::submitted(&values).unwrap();

        assert_eq!(notification.title, "You submitted the following values:");
        assert!(notification.description.contains("\"name\": \"Alice\""));
        assert!(notification
            .description
            .contains("\"phoneNumber\": \"123456\""));
    }

    #[test]
    fn test_issued_at_is_recent() {
        let before = Utc::now();
        let notification = Notification::new("title", "body");
        assert!(notification.issued_at >= before);
        assert!(notification.issued_at <= Utc::now());
    }
}
