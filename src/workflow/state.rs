//! Workflow state definitions

use super::error::WorkflowError;
use crate::state::Lead;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Colour of the status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
}

/// The single user-visible message for the current juncture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStatus {
    pub message: String,
    pub severity: Severity,
    /// Set when the message reports a failure
    pub error: Option<WorkflowError>,
}

impl WorkflowStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            error: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
            error: None,
        }
    }
}

impl From<WorkflowError> for WorkflowStatus {
    fn from(err: WorkflowError) -> Self {
        Self {
            message: err.to_string(),
            severity: Severity::Warning,
            error: Some(err),
        }
    }
}

/// Where an OTP challenge ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeOutcome {
    Pending,
    Verified,
    Rejected,
    ExpiredOrError,
}

impl ChallengeOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
            Self::ExpiredOrError => "failed",
        }
    }
}

/// One in-flight verification attempt
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    pub id: Uuid,
    pub phone: String,
    /// Snapshot submitted once the code is verified
    pub lead: Lead,
    pub code: String,
    pub outcome: ChallengeOutcome,
    pub issued_at: DateTime<Utc>,
}

impl OtpChallenge {
    pub fn new(lead: Lead) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone: lead.phone.clone(),
            lead,
            code: String::new(),
            outcome: ChallengeOutcome::Pending,
            issued_at: Utc::now(),
        }
    }

    /// Phone number with the middle digits hidden
    pub fn masked_phone(&self) -> String {
        mask_phone(&self.phone)
    }
}

/// Mask a phone number for display (e.g., 987****3210)
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() >= 7 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}****{tail}")
    } else {
        "****".to_string()
    }
}

/// Payload-free tag of the workflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowStage {
    #[default]
    Idle,
    AwaitingOtpRequest,
    ConfirmPending,
    OtpEntryPending,
    Verifying,
    Submitting,
    Completed,
}

impl WorkflowStage {
    /// Returns true while a backend call is outstanding
    pub fn is_call_outstanding(&self) -> bool {
        matches!(
            self,
            Self::AwaitingOtpRequest | Self::Verifying | Self::Submitting
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingOtpRequest => "Sending OTP",
            Self::ConfirmPending => "Confirm",
            Self::OtpEntryPending => "Enter OTP",
            Self::Verifying => "Verifying",
            Self::Submitting => "Submitting",
            Self::Completed => "Completed",
        }
    }
}

/// Actions the host may forward to the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Submit,
    ConfirmProceed,
    ConfirmCancel,
    EnterOtp,
    CancelOtp,
    VerifyOtp,
}

/// Whether an action was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Accepted,
    Ignored,
}

/// Field-level error markers for the host to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub phone: bool,
    pub otp: bool,
}

/// Workflow state; the challenge lives inside the variants so only one can exist
#[derive(Debug, Clone, Default)]
pub(crate) enum WorkflowState {
    #[default]
    Idle,
    AwaitingOtpRequest(Lead),
    ConfirmPending(OtpChallenge),
    OtpEntryPending(OtpChallenge),
    Verifying(OtpChallenge),
    Submitting(OtpChallenge),
    Completed,
}

impl WorkflowState {
    pub(crate) fn stage(&self) -> WorkflowStage {
        match self {
            Self::Idle => WorkflowStage::Idle,
            Self::AwaitingOtpRequest(_) => WorkflowStage::AwaitingOtpRequest,
            Self::ConfirmPending(_) => WorkflowStage::ConfirmPending,
            Self::OtpEntryPending(_) => WorkflowStage::OtpEntryPending,
            Self::Verifying(_) => WorkflowStage::Verifying,
            Self::Submitting(_) => WorkflowStage::Submitting,
            Self::Completed => WorkflowStage::Completed,
        }
    }

    pub(crate) fn challenge(&self) -> Option<&OtpChallenge> {
        match self {
            Self::ConfirmPending(c)
            | Self::OtpEntryPending(c)
            | Self::Verifying(c)
            | Self::Submitting(c) => Some(c),
            _ => None,
        }
    }
}
