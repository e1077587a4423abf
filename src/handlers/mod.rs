//! HTTP handlers and router assembly

pub mod enquiry;
pub mod leads;

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::{
    email::{DeliveryReceipt, Email},
    error::AppError,
    health,
    lead::LeadSubmission,
    state::AppState,
};

/// Build the application router
///
/// The landing page itself is hosted elsewhere; this service only exposes
/// the submission surfaces and a health probe, so CORS stays permissive.
pub fn router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().server.request_timeout_secs);
    let body_limit = state.config().server.body_limit_bytes;

    Router::new()
        .route("/api/send-email", post(leads::send_email))
        .route("/enquire", get(enquiry::show_form).post(enquiry::submit))
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Render and send the notification email for a validated submission
///
/// The lead's own address goes into Reply-To so the inbox can answer the
/// prospect directly.
pub(crate) async fn deliver(
    state: &AppState,
    lead: &LeadSubmission,
) -> Result<DeliveryReceipt, AppError> {
    let email_cfg = &state.config().email;
    let notification = lead.notification(&email_cfg.site_label);

    let email = Email::from_template(&notification)?
        .to(&email_cfg.to_address)
        .from(&email_cfg.from_address)
        .reply_to(&lead.email)
        .subject(&lead.subject(&email_cfg.site_label));

    let receipt = state.mailer().send(email).await?;

    tracing::info!(
        form_type = lead.form_type_label(),
        message_id = receipt.id.as_deref().unwrap_or("-"),
        "lead forwarded"
    );

    Ok(receipt)
}
