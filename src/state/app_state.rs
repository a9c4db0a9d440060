//! Application state definitions

use super::forms::LeadForm;

/// Button selected in the "Verify Your Phone Number" dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmOption {
    GoBack,
    #[default]
    EnterOtp,
}

impl ConfirmOption {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::GoBack => Self::EnterOtp,
            Self::EnterOtp => Self::GoBack,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GoBack => "Go Back",
            Self::EnterOtp => "Enter OTP",
        }
    }
}

/// Host-side state: the form being edited and dialog selections
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: LeadForm,
    pub confirm_option: ConfirmOption,
}
