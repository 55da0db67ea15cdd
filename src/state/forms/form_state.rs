//! Contact form controller: draft values, validation and the summary state

use super::field::{ContactValues, FieldId, KeystrokeVerdict, PhoneInputFilter};
use super::schema::{FieldSpec, ValidationErrors, ValidationSchema, CONTACT_SCHEMA};
use crate::notify::{Notification, Notifier};
use tracing::{debug, info, warn};

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Whether the form is being edited or its summary is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Result of a submit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was valid and is now the committed snapshot
    Submitted(ContactValues),
    /// Draft was invalid; messages are attached to the form
    Rejected(ValidationErrors),
    /// Submit is not available while the summary is shown
    Ignored,
}

/// Owns the draft of the contact form and drives the Editing/Submitted states
#[derive(Debug)]
pub struct FormController<N> {
    schema: &'static ValidationSchema,
    draft: ContactValues,
    errors: ValidationErrors,
    phase: FormPhase,
    committed: Option<ContactValues>,
    /// Index into the schema fields; one past the last field is the submit button
    active_field_index: usize,
    phone_filter: PhoneInputFilter,
    keystroke_hint: Option<FieldId>,
    notifier: N,
}

impl<N: Notifier> FormController<N> {
    pub fn new(defaults: ContactValues, phone_filter: PhoneInputFilter, notifier: N) -> Self {
        Self {
            schema: &CONTACT_SCHEMA,
            draft: defaults,
            errors: ValidationErrors::default(),
            phase: FormPhase::Editing,
            committed: None,
            active_field_index: 0,
            phone_filter,
            keystroke_hint: None,
            notifier,
        }
    }

    pub fn schema(&self) -> &'static ValidationSchema {
        self.schema
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &ContactValues {
        &self.draft
    }

    /// Last successfully submitted values, kept after the summary is dismissed
    pub fn committed(&self) -> Option<&ContactValues> {
        self.committed.as_ref()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn messages_for(&self, field: FieldId) -> &[String] {
        self.errors.messages_for(field)
    }

    /// Advisory hint for the given field, set by a filtered keystroke
    pub fn keystroke_hint(&self, field: FieldId) -> Option<&'static str> {
        (self.keystroke_hint == Some(field)).then_some(PhoneInputFilter::HINT)
    }

    /// True once a snapshot with at least one value has been committed
    pub fn is_form_filled(&self) -> bool {
        self.committed.as_ref().is_some_and(ContactValues::is_filled)
    }

    pub fn is_summary_visible(&self) -> bool {
        self.phase == FormPhase::Submitted && self.is_form_filled()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == self.schema.len()
    }

    /// Spec of the focused field, `None` when the submit button is focused
    pub fn active_spec(&self) -> Option<&'static FieldSpec> {
        self.schema.field_at(self.active_field_index)
    }

    pub fn value_of(&self, field: FieldId) -> &str {
        self.schema
            .field(field)
            .map(|spec| (spec.get)(&self.draft))
            .unwrap_or_default()
    }

    /// Replace a field's draft value. No validation runs here.
    /// Returns false when the form is not editable.
    pub fn field_changed(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        if !self.is_editable() {
            debug!(%field, "Ignoring field change while summary is shown");
            return false;
        }
        let Some(spec) = self.schema.field(field) else {
            return false;
        };
        (spec.set)(&mut self.draft, value.into());
        true
    }

    fn is_editable(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    /// Offer a typed character to the focused field
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.is_editable() {
            debug!("Ignoring keystroke while summary is shown");
            return false;
        }
        let Some(spec) = self.active_spec() else {
            return false;
        };

        match self.phone_filter.judge(spec.input_mode, c) {
            KeystrokeVerdict::Reject => {
                debug!(field = %spec.id, "Dropped non-digit keystroke");
                return false;
            }
            KeystrokeVerdict::AcceptWithHint => self.keystroke_hint = Some(spec.id),
            KeystrokeVerdict::Accept => {}
        }

        let mut value = (spec.get)(&self.draft).to_string();
        value.push(c);
        self.field_changed(spec.id, value)
    }

    /// Delete the last character of the focused field
    pub fn pop_char(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        let Some(spec) = self.active_spec() else {
            return false;
        };
        let mut value = (spec.get)(&self.draft).to_string();
        if value.pop().is_none() {
            return false;
        }
        if self.keystroke_hint == Some(spec.id) && value.chars().all(|c| c.is_ascii_digit()) {
            self.keystroke_hint = None;
        }
        self.field_changed(spec.id, value)
    }

    /// Empty the focused field
    pub fn clear_active(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        let Some(spec) = self.active_spec() else {
            return false;
        };
        if self.keystroke_hint == Some(spec.id) {
            self.keystroke_hint = None;
        }
        self.field_changed(spec.id, String::new())
    }

    /// Validate the draft; on success commit it and notify exactly once
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.phase == FormPhase::Submitted {
            debug!("Ignoring submit while summary is shown");
            return SubmitOutcome::Ignored;
        }

        match self.schema.validate(&self.draft) {
            Ok(values) => {
                self.errors = ValidationErrors::default();
                self.committed = Some(values.clone());
                self.phase = FormPhase::Submitted;
                info!("Form submitted");

                match Notification::submitted(&values) {
                    Ok(notification) => {
                        if let Err(e) = self.notifier.notify(notification).await {
                            warn!("Failed to deliver submission notification: {e}");
                        }
                    }
                    Err(e) => warn!("Failed to format submitted values: {e}"),
                }

                SubmitOutcome::Submitted(values)
            }
            Err(errors) => {
                info!(fields = errors.len(), "Form submission rejected");
                self.errors = errors.clone();
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Hide the summary and return to editing. No-op while editing.
    pub fn dismiss(&mut self) -> bool {
        if self.phase == FormPhase::Editing {
            return false;
        }
        self.phase = FormPhase::Editing;
        true
    }
}

impl<N: Notifier> Form for FormController<N> {
    fn field_count(&self) -> usize {
        self.schema.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.schema.len());
    }
}
