//! Verification workflow state machine
//!
//! User actions are synchronous and only move the machine between states.
//! Backend calls run from [`VerificationWorkflow::run_pending`], one step per
//! call, so the host can redraw between steps. Every failure lands in `Idle`.

use super::error::WorkflowError;
use super::state::{
    mask_phone, ChallengeOutcome, Dispatch, FieldErrors, OtpChallenge, UserAction,
    WorkflowStage, WorkflowState, WorkflowStatus,
};
use crate::backend::{ClientError, OtpVerdict, VerificationServiceClient};
use crate::state::{validate, FormFields, Lead, ValidationError};
use std::future::Future;
use std::time::Duration;

/// Default bound on a single backend call
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(15);

const OTP_SENT_MESSAGE: &str =
    "An OTP has been sent to your phone number. Please enter the OTP to confirm your request.";
const SUBMITTED_MESSAGE: &str =
    "Thank you for showing your interest. One of our executives will assist you soon.";
const CANCELLED_MESSAGE: &str = "Phone verification cancelled.";

/// Drives one form session through OTP request, confirmation, entry,
/// verification and submission
pub struct VerificationWorkflow<C> {
    client: C,
    state: WorkflowState,
    status: Option<WorkflowStatus>,
    field_errors: FieldErrors,
    last_outcome: Option<ChallengeOutcome>,
    call_timeout: Duration,
}

impl<C: VerificationServiceClient> VerificationWorkflow<C> {
    pub fn new(client: C) -> Self {
        Self::with_timeout(client, DEFAULT_CALL_TIMEOUT)
    }

    pub fn with_timeout(client: C, call_timeout: Duration) -> Self {
        Self {
            client,
            state: WorkflowState::Idle,
            status: None,
            field_errors: FieldErrors::default(),
            last_outcome: None,
            call_timeout,
        }
    }

    pub fn stage(&self) -> WorkflowStage {
        self.state.stage()
    }

    pub fn status(&self) -> Option<&WorkflowStatus> {
        self.status.as_ref()
    }

    /// The in-flight challenge, if any
    pub fn challenge(&self) -> Option<&OtpChallenge> {
        self.state.challenge()
    }

    /// Outcome of the most recent challenge, kept after it is discarded
    pub fn last_outcome(&self) -> Option<ChallengeOutcome> {
        self.last_outcome
    }

    pub fn field_errors(&self) -> FieldErrors {
        self.field_errors
    }

    /// Code typed so far; empty when no challenge is open
    pub fn otp_code(&self) -> &str {
        self.challenge().map(|c| c.code.as_str()).unwrap_or("")
    }

    /// Returns true while a backend call is waiting to run or resolve
    pub fn has_pending_call(&self) -> bool {
        self.stage().is_call_outstanding()
    }

    /// Whether the action is valid in the current state
    pub fn accepts(&self, action: UserAction) -> bool {
        let stage = self.stage();
        match action {
            UserAction::Submit => matches!(stage, WorkflowStage::Idle | WorkflowStage::Completed),
            UserAction::ConfirmProceed | UserAction::ConfirmCancel => {
                stage == WorkflowStage::ConfirmPending
            }
            UserAction::EnterOtp | UserAction::CancelOtp | UserAction::VerifyOtp => {
                stage == WorkflowStage::OtpEntryPending
            }
        }
    }

    /// Validate the form and, if it passes, queue the OTP request
    pub fn submit(&mut self, fields: &FormFields) -> Dispatch {
        if !self.accepts(UserAction::Submit) {
            return self.ignore(UserAction::Submit);
        }
        let from = self.stage();

        match validate(fields) {
            Ok(lead) => {
                self.field_errors.phone = false;
                self.status = Some(WorkflowStatus::success(format!(
                    "Sending OTP to {}...",
                    mask_phone(&lead.phone)
                )));
                self.transition(from, WorkflowState::AwaitingOtpRequest(lead));
            }
            Err(err) => {
                if err == ValidationError::InvalidPhone {
                    self.field_errors.phone = true;
                }
                self.fail(from, err.into());
            }
        }
        Dispatch::Accepted
    }

    /// Move from the confirmation prompt to OTP entry
    pub fn confirm_proceed(&mut self) -> Dispatch {
        match std::mem::take(&mut self.state) {
            WorkflowState::ConfirmPending(challenge) => {
                self.status = Some(WorkflowStatus::success(format!(
                    "Enter the OTP sent to {}.",
                    challenge.masked_phone()
                )));
                self.transition(
                    WorkflowStage::ConfirmPending,
                    WorkflowState::OtpEntryPending(challenge),
                );
                Dispatch::Accepted
            }
            other => self.restore(other, UserAction::ConfirmProceed),
        }
    }

    /// Abandon at the confirmation prompt; nothing is sent to the backend
    pub fn confirm_cancel(&mut self) -> Dispatch {
        match std::mem::take(&mut self.state) {
            WorkflowState::ConfirmPending(challenge) => {
                self.discard(WorkflowStage::ConfirmPending, challenge);
                Dispatch::Accepted
            }
            other => self.restore(other, UserAction::ConfirmCancel),
        }
    }

    /// Abandon at OTP entry; nothing is sent to the backend
    pub fn cancel_otp(&mut self) -> Dispatch {
        match std::mem::take(&mut self.state) {
            WorkflowState::OtpEntryPending(challenge) => {
                self.discard(WorkflowStage::OtpEntryPending, challenge);
                Dispatch::Accepted
            }
            other => self.restore(other, UserAction::CancelOtp),
        }
    }

    /// Replace the code typed into the OTP field
    pub fn enter_otp(&mut self, code: &str) -> Dispatch {
        self.edit_code(|c| {
            c.clear();
            c.push_str(code);
        })
    }

    pub fn push_otp_char(&mut self, ch: char) -> Dispatch {
        self.edit_code(|c| c.push(ch))
    }

    pub fn pop_otp_char(&mut self) -> Dispatch {
        self.edit_code(|c| {
            c.pop();
        })
    }

    /// Queue verification of the entered code
    pub fn verify_otp(&mut self) -> Dispatch {
        match std::mem::take(&mut self.state) {
            WorkflowState::OtpEntryPending(challenge) => {
                self.status = Some(WorkflowStatus::success("Verifying OTP..."));
                self.transition(
                    WorkflowStage::OtpEntryPending,
                    WorkflowState::Verifying(challenge),
                );
                Dispatch::Accepted
            }
            other => self.restore(other, UserAction::VerifyOtp),
        }
    }

    /// Run the backend call for the current state, if there is one.
    ///
    /// Returns false when nothing was pending. A verified code leaves the
    /// machine in `Submitting`, which the next call continues without user
    /// input. Dropping the future mid-call leaves the workflow `Idle`.
    pub async fn run_pending(&mut self, fields: &mut FormFields) -> bool {
        match std::mem::take(&mut self.state) {
            WorkflowState::AwaitingOtpRequest(lead) => self.request_otp(lead).await,
            WorkflowState::Verifying(challenge) => self.check_otp(challenge).await,
            WorkflowState::Submitting(challenge) => self.persist(challenge, fields).await,
            other => {
                self.state = other;
                return false;
            }
        }
        true
    }

    /// Run backend calls until the machine waits on the user again
    pub async fn run_to_rest(&mut self, fields: &mut FormFields) -> WorkflowStage {
        while self.run_pending(fields).await {}
        self.stage()
    }

    async fn request_otp(&mut self, lead: Lead) {
        let from = WorkflowStage::AwaitingOtpRequest;
        let result = bounded(self.call_timeout, self.client.request_otp(&lead.phone)).await;

        match result {
            Ok(()) => {
                let challenge = OtpChallenge::new(lead);
                tracing::info!(
                    challenge = %challenge.id,
                    phone = %challenge.masked_phone(),
                    "OTP requested"
                );
                self.last_outcome = Some(challenge.outcome);
                self.status = Some(WorkflowStatus::success(OTP_SENT_MESSAGE));
                self.transition(from, WorkflowState::ConfirmPending(challenge));
            }
            Err(err) => {
                tracing::warn!(error = %err, "OTP request failed");
                self.fail(from, WorkflowError::OtpRequestFailed);
            }
        }
    }

    async fn check_otp(&mut self, mut challenge: OtpChallenge) {
        let from = WorkflowStage::Verifying;
        let result = bounded(
            self.call_timeout,
            self.client.verify_otp(&challenge.phone, &challenge.code),
        )
        .await;

        // Codes are single-use whatever the verdict
        challenge.code.clear();

        match result {
            Ok(OtpVerdict { verified: true }) => {
                challenge.outcome = ChallengeOutcome::Verified;
                self.last_outcome = Some(challenge.outcome);
                self.field_errors.otp = false;
                tracing::info!(challenge = %challenge.id, "OTP verified");
                self.status = Some(WorkflowStatus::success(
                    "Phone number verified. Saving your details...",
                ));
                self.transition(from, WorkflowState::Submitting(challenge));
            }
            Ok(OtpVerdict { verified: false }) => {
                challenge.outcome = ChallengeOutcome::Rejected;
                self.last_outcome = Some(challenge.outcome);
                self.field_errors.otp = true;
                tracing::info!(challenge = %challenge.id, "OTP rejected");
                self.fail(from, WorkflowError::IncorrectOtp);
            }
            Err(err) => {
                challenge.outcome = ChallengeOutcome::ExpiredOrError;
                self.last_outcome = Some(challenge.outcome);
                self.field_errors.otp = true;
                tracing::warn!(challenge = %challenge.id, error = %err, "OTP verification failed");
                self.fail(from, WorkflowError::VerificationFailed);
            }
        }
    }

    async fn persist(&mut self, challenge: OtpChallenge, fields: &mut FormFields) {
        let from = WorkflowStage::Submitting;
        let result = bounded(self.call_timeout, self.client.submit_form(&challenge.lead)).await;

        match result {
            Ok(()) => {
                tracing::info!(challenge = %challenge.id, "lead submitted");
                fields.clear();
                self.status = Some(WorkflowStatus::success(SUBMITTED_MESSAGE));
                self.transition(from, WorkflowState::Completed);
            }
            Err(err) => {
                tracing::warn!(challenge = %challenge.id, error = %err, "lead submission failed");
                self.fail(from, WorkflowError::SubmissionFailed);
            }
        }
    }

    fn edit_code(&mut self, edit: impl FnOnce(&mut String)) -> Dispatch {
        if let WorkflowState::OtpEntryPending(challenge) = &mut self.state {
            edit(&mut challenge.code);
            Dispatch::Accepted
        } else {
            self.ignore(UserAction::EnterOtp)
        }
    }

    fn discard(&mut self, from: WorkflowStage, challenge: OtpChallenge) {
        tracing::info!(challenge = %challenge.id, "OTP challenge cancelled");
        self.status = Some(WorkflowStatus::warning(CANCELLED_MESSAGE));
        self.transition(from, WorkflowState::Idle);
    }

    fn fail(&mut self, from: WorkflowStage, err: WorkflowError) {
        if err.is_local() {
            tracing::debug!(error = %err, "form rejected");
        }
        self.status = Some(err.into());
        self.transition(from, WorkflowState::Idle);
    }

    fn transition(&mut self, from: WorkflowStage, next: WorkflowState) {
        tracing::info!(
            from = from.label(),
            to = next.stage().label(),
            "workflow transition"
        );
        self.state = next;
    }

    fn restore(&mut self, state: WorkflowState, action: UserAction) -> Dispatch {
        self.state = state;
        self.ignore(action)
    }

    fn ignore(&self, action: UserAction) -> Dispatch {
        tracing::debug!(?action, stage = ?self.stage(), "action ignored");
        Dispatch::Ignored
    }
}

/// Bound a backend call by the workflow's timeout
async fn bounded<T>(
    limit: Duration,
    call: impl Future<Output = Result<T, ClientError>>,
) -> Result<T, ClientError> {
    tokio::time::timeout(limit, call)
        .await
        .unwrap_or(Err(ClientError::Timeout(limit)))
}
