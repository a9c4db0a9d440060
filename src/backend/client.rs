//! HTTP client for the lead verification backend
//!
//! Talks JSON over HTTPS to the OTP and form-persistence endpoints.

use super::traits::{ClientError, OtpVerdict, VerificationServiceClient};
use crate::state::Lead;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Default backend address
pub const DEFAULT_BACKEND_URL: &str = "https://realtor-form-backend.vercel.app";

const SEND_OTP_PATH: &str = "/api/send-otp";
const VERIFY_OTP_PATH: &str = "/api/verify-otp";
const SUBMIT_FORM_PATH: &str = "/api/submit-form";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendOtpRequest<'a> {
    phone_number: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyOtpRequest<'a> {
    phone_number: &'a str,
    otp: &'a str,
}

/// Client for the verification backend
pub struct HttpVerificationClient {
    http: Client,
    base_url: String,
}

impl HttpVerificationClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and return the response if it succeeded
    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ClientError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl VerificationServiceClient for HttpVerificationClient {
    async fn request_otp(&self, phone_number: &str) -> Result<(), ClientError> {
        self.post(SEND_OTP_PATH, &SendOtpRequest { phone_number })
            .await?;
        Ok(())
    }

    async fn verify_otp(&self, phone_number: &str, code: &str) -> Result<OtpVerdict, ClientError> {
        let response = self
            .post(
                VERIFY_OTP_PATH,
                &VerifyOtpRequest {
                    phone_number,
                    otp: code,
                },
            )
            .await?;

        response
            .json::<OtpVerdict>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn submit_form(&self, lead: &Lead) -> Result<(), ClientError> {
        self.post(SUBMIT_FORM_PATH, lead).await?;
        Ok(())
    }
}
