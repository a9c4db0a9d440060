//! Trait abstraction for the verification backend to enable mocking in tests

use crate::state::Lead;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Failure talking to the verification backend
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Backend answer to an OTP check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OtpVerdict {
    pub verified: bool,
}

/// Remote operations the verification workflow depends on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerificationServiceClient: Send + Sync {
    /// Ask the backend to send an OTP to the phone number
    async fn request_otp(&self, phone_number: &str) -> Result<(), ClientError>;

    /// Check a user-entered code against the OTP issued for the phone number
    async fn verify_otp(&self, phone_number: &str, code: &str) -> Result<OtpVerdict, ClientError>;

    /// Persist a verified lead
    async fn submit_form(&self, lead: &Lead) -> Result<(), ClientError>;
}
