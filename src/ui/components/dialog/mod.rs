//! Dialog components for TUI

mod base;
mod confirm_dialog;
mod otp_dialog;
mod progress_dialog;

pub use confirm_dialog::render_confirm_dialog;
pub use otp_dialog::render_otp_dialog;
pub use progress_dialog::render_progress_dialog;
