//! Failure taxonomy of the verification workflow

use crate::state::ValidationError;
use thiserror::Error;

/// Every way a submission attempt can end short of success.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("All fields are required.")]
    MissingField,
    #[error("Phone number must be 10 digits.")]
    InvalidPhone,
    #[error("Failed to send OTP. Please try again.")]
    OtpRequestFailed,
    #[error("Incorrect OTP. Please try again.")]
    IncorrectOtp,
    #[error("OTP verification failed. Please try again.")]
    VerificationFailed,
    #[error("Failed to save form data. Please try again.")]
    SubmissionFailed,
}

impl WorkflowError {
    /// Returns true for failures detected before any network call
    pub fn is_local(&self) -> bool {
        matches!(self, Self::MissingField | Self::InvalidPhone)
    }
}

impl From<ValidationError> for WorkflowError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingField => Self::MissingField,
            ValidationError::InvalidPhone => Self::InvalidPhone,
        }
    }
}
