//! Application state
//!
//! Cheap-clone bundle of configuration and the email backend. Handlers are
//! otherwise stateless; nothing here is mutated after startup.

use std::sync::Arc;

use crate::{
    config::{AppConfig, EmailBackendKind},
    email::{ConsoleBackend, EmailSender, ResendBackend, SmtpBackend},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    mailer: Arc<dyn EmailSender>,
}

impl AppState {
    /// Create state, wiring up the email backend named in the configuration
    ///
    /// A Resend backend without a credential is still constructed; sends
    /// through it fail with a configuration error. An SMTP backend needs its
    /// `SMTP_*` environment variables at startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP backend is selected and its environment
    /// variables are missing.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let mailer: Arc<dyn EmailSender> = match config.email.backend {
            EmailBackendKind::Resend => {
                Arc::new(ResendBackend::new(config.email.api_key.clone()))
            }
            EmailBackendKind::Smtp => Arc::new(SmtpBackend::from_env()?),
            EmailBackendKind::Console => Arc::new(ConsoleBackend::new()),
        };

        Ok(Self {
            config: Arc::new(config),
            mailer,
        })
    }

    /// Create state with an explicit mailer (used by tests)
    #[must_use]
    pub fn with_mailer(config: AppConfig, mailer: Arc<dyn EmailSender>) -> Self {
        Self {
            config: Arc::new(config),
            mailer,
        }
    }

    /// Configuration reference
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Email backend reference
    #[must_use]
    pub fn mailer(&self) -> &dyn EmailSender {
        self.mailer.as_ref()
    }
}
