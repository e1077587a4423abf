//! Console backend for development
//!
//! Logs emails instead of sending them, so the submission flow can be
//! exercised end-to-end without provider credentials.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::email::{DeliveryReceipt, Email, EmailError, EmailSender};

/// Log-only email backend
#[derive(Debug, Clone, Default)]
pub struct ConsoleBackend {
    verbose: bool,
}

impl ConsoleBackend {
    /// Create a new console backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console backend that also logs full bodies at debug level
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }
}

#[async_trait]
impl EmailSender for ConsoleBackend {
    async fn send(&self, email: Email) -> Result<DeliveryReceipt, EmailError> {
        email.validate()?;

        let from = email.from.as_ref().ok_or(EmailError::NoSender)?;
        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;

        info!(
            from = %from,
            to = ?email.to,
            reply_to = ?email.reply_to,
            subject = %subject,
            "console email sent"
        );

        if self.verbose {
            if let Some(text) = &email.text {
                debug!(text = %text, "email text body");
            }
            if let Some(html) = &email.html {
                debug!(html = %html, "email html body");
            }
        }

        Ok(DeliveryReceipt::default())
    }
}
