//! Integration tests for the HTMX enquiry form flow

mod support;

use std::sync::Arc;

use support::{assert_hx_trigger, server_with, FailingMailer, RecordingMailer};

#[tokio::test]
async fn get_renders_idle_form() {
    let server = server_with(Arc::new(RecordingMailer::new()));

    let response = server.get("/enquire").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("hx-post=\"/enquire\""));
    assert!(html.contains("name=\"name\""));
    assert!(html.contains("name=\"email\""));
    assert!(html.contains("name=\"phone\""));
    assert!(!html.contains("field-error"));
}

#[tokio::test]
async fn blank_name_shows_field_error_and_sends_nothing() {
    let mailer = Arc::new(RecordingMailer::new());
    let server = server_with(mailer.clone());

    let response = server
        .post("/enquire")
        .form(&[
            ("name", ""),
            ("email", "jane@x.com"),
            ("phone", "123"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Name is required"));
    // Submitted values are kept so the user does not retype them.
    assert!(html.contains("value=\"jane@x.com\""));
    assert!(html.contains("<form"));

    assert_eq!(mailer.sent_count(), 0);
}

#[tokio::test]
async fn invalid_shapes_show_per_field_errors() {
    let mailer = Arc::new(RecordingMailer::new());
    let server = server_with(mailer.clone());

    let response = server
        .post("/enquire")
        .form(&[
            ("name", "Jane"),
            ("email", "not-an-email"),
            ("phone", "letters"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Invalid email format"));
    assert!(html.contains("Invalid phone format"));
    assert_eq!(mailer.sent_count(), 0);
}

#[tokio::test]
async fn valid_submission_swaps_in_submitted_state_and_fires_event() {
    let mailer = Arc::new(RecordingMailer::new());
    let server = server_with(mailer.clone());

    let response = server
        .post("/enquire")
        .form(&[
            ("name", "Jane Doe"),
            ("email", "jane@x.com"),
            ("phone", "+61 400 000 000"),
            ("message", "Hi"),
            ("formType", "Enquiry Form"),
        ])
        .await;

    response.assert_status_ok();
    assert_hx_trigger(&response, "generate_lead");

    let html = response.text();
    assert!(html.contains("Thank You!"));
    // No form controls remain; the submit control cannot fire again
    // until the fragment is re-fetched.
    assert!(!html.contains("<form"));
    assert!(!html.contains("<button"));

    assert_eq!(mailer.sent_count(), 1);
    let email = mailer.last_sent().unwrap();
    assert_eq!(
        email.subject.as_deref(),
        Some("example.test - New Enquiry Form from Jane Doe")
    );
}

#[tokio::test]
async fn delivery_failure_shows_retry_banner_with_form_intact() {
    let server = server_with(Arc::new(FailingMailer));

    let response = server
        .post("/enquire")
        .form(&[
            ("name", "Jane Doe"),
            ("email", "jane@x.com"),
            ("phone", "+61 400 000 000"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Please try again"));
    // The form is back so the user can resubmit manually.
    assert!(html.contains("<form"));
    assert!(html.contains("value=\"Jane Doe\""));
    assert!(response.headers().get("HX-Trigger").is_none());
}
