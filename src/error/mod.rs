//! Error types and HTTP error mapping
//!
//! Every failure in the submission path collapses into [`AppError`], which
//! renders as a JSON body of the shape `{"error": "<message>"}`. Validation
//! failures carry their message to the client verbatim; server-side failures
//! (configuration, provider, anything unexpected) log the underlying cause
//! and respond with a fixed generic message so internals never leak.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::email::EmailError;

/// Service error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Submitted lead failed validation (400)
    #[error("{0}")]
    Validation(String),

    /// Email delivery is not configured (500)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery failed (500)
    #[error("Email error: {0}")]
    Email(#[from] EmailError),

    /// Anything else (500)
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Client-facing message for this error
    ///
    /// 4xx errors speak for themselves; 5xx errors map to fixed strings.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Config(_) | Self::Email(EmailError::Config(_)) => {
                "Email service not configured".to_string()
            }
            Self::Email(_) => "Failed to send email".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// HTTP status this error maps to
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Email(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = AppError::Validation("Invalid email format".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "Invalid email format");
    }

    #[test]
    fn config_errors_hide_details() {
        let err = AppError::Config("RESEND_API_KEY not set".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Email service not configured");
    }

    #[test]
    fn email_config_errors_map_like_config_errors() {
        let err = AppError::Email(EmailError::Config("no api key".to_string()));
        assert_eq!(err.client_message(), "Email service not configured");
    }

    #[test]
    fn provider_errors_use_generic_message() {
        let err = AppError::Email(EmailError::Provider {
            status: Some(422),
            message: "invalid sender".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Failed to send email");
    }

    #[test]
    fn unexpected_errors_use_generic_message() {
        let err = AppError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(err.client_message(), "Internal server error");
    }
}
