//! Shared test support: recording/failing mailers and server construction
#![allow(dead_code)] // not every test binary uses every helper

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::{TestResponse, TestServer};

use leadgate::{
    config::{AppConfig, EmailBackendKind},
    email::{DeliveryReceipt, Email, EmailError, EmailSender},
    handlers,
    state::AppState,
};

/// Mailer that captures sent emails in memory for assertions
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent_emails(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_sent(&self) -> Option<Email> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, email: Email) -> Result<DeliveryReceipt, EmailError> {
        email.validate()?;
        self.sent.lock().unwrap().push(email);
        Ok(DeliveryReceipt::with_id("test-message-id"))
    }
}

/// Mailer whose provider always reports an error
#[derive(Debug, Clone, Default)]
pub struct FailingMailer;

#[async_trait]
impl EmailSender for FailingMailer {
    async fn send(&self, email: Email) -> Result<DeliveryReceipt, EmailError> {
        email.validate()?;
        Err(EmailError::Provider {
            status: Some(500),
            message: "provider exploded".to_string(),
        })
    }
}

/// Configuration used by the integration tests
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.email.from_address = "leads@example.test".to_string();
    config.email.to_address = "inbox@example.test".to_string();
    config.email.site_label = "example.test".to_string();
    config
}

/// Test server wired to the given mailer
pub fn server_with(mailer: Arc<dyn EmailSender>) -> TestServer {
    let state = AppState::with_mailer(test_config(), mailer);
    TestServer::new(handlers::router(state)).expect("test server")
}

/// Test server backed by a real Resend backend with no credential
pub fn server_without_credential() -> TestServer {
    let mut config = test_config();
    config.email.backend = EmailBackendKind::Resend;
    config.email.api_key = None;
    let state = AppState::new(config).expect("state");
    TestServer::new(handlers::router(state)).expect("test server")
}

/// Assert that the response carries an HX-Trigger header naming the event
pub fn assert_hx_trigger(response: &TestResponse, expected_event: &str) {
    let header = response
        .headers()
        .get("HX-Trigger")
        .expect("HX-Trigger header not found");
    let actual = header.to_str().expect("invalid HX-Trigger header value");
    assert!(
        actual.contains(expected_event),
        "Expected HX-Trigger to contain '{expected_event}', got '{actual}'"
    );
}
