//! Resend backend
//!
//! Sends email through the Resend HTTP API (`POST /emails`). The API key is
//! held as an `Option` so a missing credential surfaces per-request as a
//! configuration error, before any network call is made.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::email::{DeliveryReceipt, Email, EmailError, EmailSender};

const DEFAULT_API_BASE: &str = "https://api.resend.com";

/// Resend HTTP API backend
pub struct ResendBackend {
    api_key: Option<String>,
    api_base: String,
    client: reqwest::Client,
}

/// Wire format of a Resend send request
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl ResendBackend {
    /// Create a backend with an optional API key
    ///
    /// `None` produces a backend whose every send fails with
    /// `EmailError::Config`, matching the deployed behavior when the
    /// credential variable is unset.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            api_base: DEFAULT_API_BASE.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a backend from the `RESEND_API_KEY` environment variable
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty()))
    }

    /// Override the API base URL (used by tests)
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Whether a credential is configured
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl EmailSender for ResendBackend {
    async fn send(&self, email: Email) -> Result<DeliveryReceipt, EmailError> {
        email.validate()?;

        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| EmailError::config("RESEND_API_KEY is not set"))?;

        let from = email.from.as_ref().ok_or(EmailError::NoSender)?;
        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;

        let request = SendRequest {
            from,
            to: &email.to,
            subject,
            html: email.html.as_deref(),
            text: email.text.as_deref(),
            reply_to: email.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/emails", self.api_base))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailError::provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiError>()
                .await
                .map_or_else(|_| status.to_string(), |err| err.message);
            return Err(EmailError::Provider {
                status: Some(status.as_u16()),
                message,
            });
        }

        let ack: SendResponse = response
            .json()
            .await
            .map_err(|e| EmailError::provider(format!("malformed acknowledgment: {e}")))?;

        tracing::debug!(message_id = %ack.id, "resend accepted email");

        Ok(DeliveryReceipt::with_id(ack.id))
    }
}
