//! Form domain layer
//!
//! Field values, in-form navigation and the validation gate for the lead form.

mod field;
mod lead_form;
mod validation;

pub use field::{Configuration, FormFields, LeadField, VisitTiming};
pub use lead_form::{Form, LeadForm};
pub use validation::{validate, Lead, ValidationError};
