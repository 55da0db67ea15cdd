//! Form domain layer
//!
//! Type-safe contact form handling: field declarations, validation and the
//! controller that moves between editing and the submitted summary.

mod field;
mod form_state;
mod schema;

pub use field::{ContactValues, FieldId, PhoneInputFilter};
pub use form_state::{Form, FormController, FormPhase, SubmitOutcome};
pub use schema::FieldSpec;
