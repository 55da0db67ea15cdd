//! Form rendering

mod contact_form;
mod field_renderer;
mod summary;

pub use contact_form::draw as draw_contact_form;
pub use summary::draw as draw_summary;
