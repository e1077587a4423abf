//! Email error types

use thiserror::Error;

/// Errors that can occur when building or sending emails
#[derive(Debug, Error)]
pub enum EmailError {
    /// Email has no recipients
    #[error("email must have at least one recipient")]
    NoRecipients,

    /// Email has no sender
    #[error("email must have a from address")]
    NoSender,

    /// Email has no subject
    #[error("email must have a subject")]
    NoSubject,

    /// Email has no body content
    #[error("email must have either text or HTML content")]
    NoContent,

    /// Invalid email address format
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error
    #[error("failed to render email template: {0}")]
    Template(#[from] askama::Error),

    /// Email configuration error (missing credential, bad settings)
    #[error("email configuration error: {0}")]
    Config(String),

    /// The transactional-email provider reported a failure
    #[error("provider error ({status:?}): {message}")]
    Provider {
        /// HTTP status returned by the provider, when the call got that far
        status: Option<u16>,
        /// Provider-supplied error detail
        message: String,
    },

    /// SMTP transport error
    #[error("SMTP error: {0}")]
    Smtp(String),
}

impl EmailError {
    /// Create a configuration error from a string message
    #[must_use]
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    /// Create an SMTP error from a string message
    #[must_use]
    pub fn smtp<T: Into<String>>(msg: T) -> Self {
        Self::Smtp(msg.into())
    }

    /// Create a provider error without an HTTP status (transport failure)
    #[must_use]
    pub fn provider<T: Into<String>>(msg: T) -> Self {
        Self::Provider {
            status: None,
            message: msg.into(),
        }
    }
}
