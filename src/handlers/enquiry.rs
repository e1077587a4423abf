//! HTMX enquiry form flow
//!
//! The form is a self-replacing fragment: `GET /enquire` renders it idle,
//! `POST /enquire` swaps in either the form with per-field errors (or a
//! retry banner when delivery failed) or the submitted state. The submitted
//! state has no form controls, so the submit button cannot fire again until
//! the fragment is re-fetched.
//!
//! A successful submission sets `HX-Trigger: generate_lead`; page-level
//! analytics may listen for it or not, the server does not care.

use askama::Template;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Response},
};
use axum_htmx::HxResponseTrigger;
use validator::Validate;

use crate::{error::AppError, forms::ValidationErrors, lead::LeadSubmission, state::AppState};

/// Event name fired toward page-level analytics on success
pub const LEAD_EVENT: &str = "generate_lead";

#[derive(Template)]
#[template(path = "enquiry/form.html")]
struct FormView<'a> {
    lead: &'a LeadSubmission,
    errors: &'a ValidationErrors,
    retry: bool,
}

#[derive(Template)]
#[template(path = "enquiry/submitted.html")]
struct SubmittedView;

fn render_form(
    lead: &LeadSubmission,
    errors: &ValidationErrors,
    retry: bool,
) -> Result<Html<String>, AppError> {
    let view = FormView { lead, errors, retry };
    Ok(Html(view.render().map_err(anyhow::Error::from)?))
}

/// `GET /enquire` — idle form fragment
pub async fn show_form() -> Result<Html<String>, AppError> {
    render_form(&LeadSubmission::default(), &ValidationErrors::new(), false)
}

/// `POST /enquire` — validate, deliver, and swap in the next state
pub async fn submit(
    State(state): State<AppState>,
    Form(lead): Form<LeadSubmission>,
) -> Result<Response, AppError> {
    if let Err(errors) = lead.validate() {
        let errors = ValidationErrors::from_validator(&errors);
        tracing::debug!(error_count = errors.count(), "enquiry rejected client-side rules");
        return Ok(render_form(&lead, &errors, false)?.into_response());
    }

    match super::deliver(&state, &lead).await {
        Ok(_) => {
            let submitted = SubmittedView.render().map_err(anyhow::Error::from)?;
            let trigger = HxResponseTrigger::normal([LEAD_EVENT.to_string()]);
            Ok((trigger, Html(submitted)).into_response())
        }
        Err(err) => {
            // Terminal for this attempt; the user resubmits manually.
            tracing::error!(error = %err, "enquiry delivery failed");
            Ok(render_form(&lead, &ValidationErrors::new(), true)?.into_response())
        }
    }
}
