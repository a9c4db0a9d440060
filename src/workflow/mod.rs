//! Phone verification workflow
//!
//! The state machine that gates lead submission behind an OTP challenge.

mod error;
mod machine;
mod state;

pub use error::WorkflowError;
pub use machine::{VerificationWorkflow, DEFAULT_CALL_TIMEOUT};
pub use state::{
    ChallengeOutcome, FieldErrors, OtpChallenge, Severity, WorkflowStage, WorkflowStatus,
};
