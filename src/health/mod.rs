//! Health check endpoint
//!
//! The service has no database or cache, so the only component worth
//! reporting is email delivery: a Resend backend without its credential
//! makes the service degraded (it accepts requests but every valid
//! submission will fail with a configuration error).

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Overall service status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Ready to forward submissions
    Healthy,
    /// Running, but email delivery is not usable
    Degraded,
}

/// Health check response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: HealthStatus,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Configured email backend
    pub email_backend: String,
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let degraded = !state.config().email_credential_present();

    let body = HealthResponse {
        status: if degraded {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        },
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        email_backend: state.config().email.backend.as_str().to_string(),
    };

    let status = if degraded {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (status, Json(body))
}
