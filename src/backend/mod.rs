//! Verification backend client module

mod client;
mod traits;

pub use client::{HttpVerificationClient, DEFAULT_BACKEND_URL};
pub use traits::{ClientError, OtpVerdict, VerificationServiceClient};

#[cfg(test)]
pub use traits::MockVerificationServiceClient;
