//! Form field identifiers and value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    PhoneNumber,
}

impl FieldId {
    /// Key used for this field in serialized values and error mappings
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PhoneNumber => "phoneNumber",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Kind of keyboard input a field expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Text,
    Numeric,
}

/// How numeric inputs treat non-digit keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneInputFilter {
    /// Accept the keystroke and show a hint under the field
    #[default]
    Advisory,
    /// Drop the keystroke before it reaches the draft
    Strict,
}

/// What happens to a single keystroke offered to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeystrokeVerdict {
    Accept,
    AcceptWithHint,
    Reject,
}

impl PhoneInputFilter {
    /// Hint shown when a numeric field receives a non-digit
    pub const HINT: &'static str = "Digits only";

    pub fn judge(&self, mode: InputMode, c: char) -> KeystrokeVerdict {
        if mode == InputMode::Text || c.is_ascii_digit() {
            return KeystrokeVerdict::Accept;
        }
        match self {
            Self::Advisory => KeystrokeVerdict::AcceptWithHint,
            Self::Strict => KeystrokeVerdict::Reject,
        }
    }
}

/// Values of the contact form, serialized with the form's field keys
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactValues {
    pub name: String,
    pub phone_number: String,
}

impl ContactValues {
    pub const DEFAULT_NAME: &'static str = "John Doe";
    pub const DEFAULT_PHONE_NUMBER: &'static str = "62";

    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Values a freshly mounted form starts with
    pub fn mount_defaults() -> Self {
        Self::new(Self::DEFAULT_NAME, Self::DEFAULT_PHONE_NUMBER)
    }

    /// True when at least one field holds a value
    pub fn is_filled(&self) -> bool {
        !self.name.is_empty() || !self.phone_number.is_empty()
    }

    /// Pretty-printed JSON (2-space indent) used for notifications and the summary
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_id {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_keys_match_serialized_names() {
            assert_eq!(FieldId::Name.key(), "name");
            assert_eq!(FieldId::PhoneNumber.key(), "phoneNumber");
            assert_eq!(FieldId::PhoneNumber.to_string(), "phoneNumber");
        }
    }

    mod phone_input_filter {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_advisory() {
            assert_eq!(PhoneInputFilter::default(), PhoneInputFilter::Advisory);
        }

        #[test]
        fn test_text_fields_accept_anything() {
            let filter = PhoneInputFilter::Strict;
            assert_eq!(filter.judge(InputMode::Text, 'x'), KeystrokeVerdict::Accept);
            assert_eq!(filter.judge(InputMode::Text, '+'), KeystrokeVerdict::Accept);
        }

        #[test]
        fn test_digits_always_accepted() {
            for filter in [PhoneInputFilter::Advisory, PhoneInputFilter::Strict] {
                assert_eq!(
                    filter.judge(InputMode::Numeric, '7'),
                    KeystrokeVerdict::Accept
                );
            }
        }

        #[test]
        fn test_advisory_accepts_non_digit_with_hint() {
            let filter = PhoneInputFilter::Advisory;
            assert_eq!(
                filter.judge(InputMode::Numeric, '+'),
                KeystrokeVerdict::AcceptWithHint
            );
        }

        #[test]
        fn test_strict_rejects_non_digit() {
            let filter = PhoneInputFilter::Strict;
            assert_eq!(
                filter.judge(InputMode::Numeric, 'a'),
                KeystrokeVerdict::Reject
            );
        }

        #[test]
        fn test_deserializes_lowercase() {
            let parsed: PhoneInputFilter = serde_json::from_str("\"strict\"").unwrap();
            assert_eq!(parsed, PhoneInputFilter::Strict);
        }
    }

    mod contact_values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_mount_defaults() {
            let values = ContactValues::mount_defaults();
            assert_eq!(values.name, "John Doe");
            assert_eq!(values.phone_number, "62");
        }

        #[test]
        fn test_is_filled() {
            assert!(!ContactValues::default().is_filled());
            assert!(ContactValues::new("", "1").is_filled());
            assert!(ContactValues::new("a", "").is_filled());
        }

        #[test]
        fn test_pretty_json_uses_form_keys_and_two_space_indent() {
            let values = ContactValues::new("Alice", "123456");
            let json = values.to_pretty_json().unwrap();
            assert_eq!(
                json,
                "{\n  \"name\": \"Alice\",\n  \"phoneNumber\": \"123456\"\n}"
            );
        }
    }
}
