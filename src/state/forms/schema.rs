//! Static validation schema for the contact form
//!
//! Every field is declared once, with its label, input mode, typed accessor
//! and mutator over [`ContactValues`], and its length rule.

use super::field::{ContactValues, FieldId, InputMode};
use std::fmt;
use thiserror::Error;

/// Length constraint for a single field, with a message per violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    pub min_len: usize,
    pub max_len: usize,
    pub too_short: &'static str,
    pub too_long: &'static str,
}

impl ValidationRule {
    pub const fn new(
        min_len: usize,
        max_len: usize,
        too_short: &'static str,
        too_long: &'static str,
    ) -> Self {
        assert!(min_len <= max_len, "min_len must not exceed max_len");
        assert!(
            !too_short.is_empty() && !too_long.is_empty(),
            "violation messages must be non-empty"
        );
        Self {
            min_len,
            max_len,
            too_short,
            too_long,
        }
    }

    /// Returns the violated message, if any. Length is counted in chars.
    pub fn check(&self, value: &str) -> Option<&'static str> {
        let len = value.chars().count();
        if len < self.min_len {
            Some(self.too_short)
        } else if len > self.max_len {
            Some(self.too_long)
        } else {
            None
        }
    }
}

pub const NAME_RULE: ValidationRule = ValidationRule::new(
    2,
    20,
    "Name must be at least 2 characters.",
    "Name cannot be more than 20 characters.",
);

pub const PHONE_NUMBER_RULE: ValidationRule = ValidationRule::new(
    6,
    20,
    "Phone number must be at least 6 digits.",
    "Phone number cannot be more than 20 digits.",
);

/// Declaration of one form field
#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_mode: InputMode,
    pub rule: ValidationRule,
    pub get: fn(&ContactValues) -> &str,
    pub set: fn(&mut ContactValues, String),
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("input_mode", &self.input_mode)
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}

fn get_name(values: &ContactValues) -> &str {
    &values.name
}

fn set_name(values: &mut ContactValues, value: String) {
    values.name = value;
}

fn get_phone_number(values: &ContactValues) -> &str {
    &values.phone_number
}

fn set_phone_number(values: &mut ContactValues, value: String) {
    values.phone_number = value;
}

/// Ordered set of field declarations
#[derive(Debug)]
pub struct ValidationSchema {
    pub fields: &'static [FieldSpec],
}

pub static CONTACT_SCHEMA: ValidationSchema = ValidationSchema {
    fields: &[
        FieldSpec {
            id: FieldId::Name,
            label: "Name",
            placeholder: "Name",
            input_mode: InputMode::Text,
            rule: NAME_RULE,
            get: get_name,
            set: set_name,
        },
        FieldSpec {
            id: FieldId::PhoneNumber,
            label: "Phone Number",
            placeholder: "Phone number",
            input_mode: InputMode::Numeric,
            rule: PHONE_NUMBER_RULE,
            get: get_phone_number,
            set: set_phone_number,
        },
    ],
};

impl ValidationSchema {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.id == id)
    }

    pub fn field_at(&self, index: usize) -> Option<&FieldSpec> {
        self.fields.get(index)
    }

    /// Validate every field, returning the values unchanged when all rules hold
    pub fn validate(&self, values: &ContactValues) -> Result<ContactValues, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for spec in self.fields {
            if let Some(message) = spec.rule.check((spec.get)(values)) {
                errors.push(spec.id, message);
            }
        }

        if errors.is_empty() {
            Ok(values.clone())
        } else {
            Err(errors)
        }
    }
}

/// Violations for a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {}", .messages.join(" "))]
pub struct ValidationError {
    pub field: FieldId,
    pub messages: Vec<String>,
}

/// Violations keyed by field, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: FieldId, message: impl Into<String>) {
        let message = message.into();
        match self.errors.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.messages.push(message),
            None => self.errors.push(ValidationError {
                field,
                messages: vec![message],
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages attached to a field (empty when the field is valid)
    pub fn messages_for(&self, field: FieldId) -> &[String] {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.messages.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}
