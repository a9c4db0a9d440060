//! Form rendering module
//!
//! This module contains UI components for rendering the lead form:
//! - `field_renderer`: Field rendering utilities
//! - `lead_form`: The four lead rows and the submit button

mod field_renderer;
mod lead_form;

pub use lead_form::draw_lead_form;
