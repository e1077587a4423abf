//! JSON submission endpoint
//!
//! `POST /api/send-email` re-validates the submission server-side whatever
//! the client claims to have checked, then forwards it as one email. The
//! provider acknowledgment is echoed under `data`.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    error::AppError,
    lead::{submission_error_message, LeadSubmission},
    state::AppState,
};

/// `POST /api/send-email`
///
/// # Errors
///
/// - 400 `Missing required fields` / `Invalid email format` /
///   `Invalid phone format` before any provider call
/// - 500 `Email service not configured` when the credential is absent
/// - 500 `Failed to send email` when the provider reports an error
/// - 500 `Internal server error` when the body cannot be parsed at all
pub async fn send_email(
    State(state): State<AppState>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    // An unparseable body is not a validation outcome; it maps to the
    // generic internal error.
    let Json(lead) =
        payload.map_err(|rejection| AppError::Internal(anyhow::Error::new(rejection)))?;

    lead.validate()
        .map_err(|errors| AppError::Validation(submission_error_message(&errors)))?;

    let receipt = super::deliver(&state, &lead).await?;

    Ok(Json(json!({ "success": true, "data": receipt })))
}
