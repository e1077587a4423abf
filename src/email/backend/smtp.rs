//! SMTP backend
//!
//! Delivers lead notifications through a plain SMTP relay using `lettre`.
//! Useful for deployments that route mail through their own relay instead
//! of a transactional provider.

use async_trait::async_trait;
use lettre::{
    message::{header, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::{DeliveryReceipt, Email, EmailError, EmailSender};

/// SMTP relay configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,
    /// SMTP server port (587 for STARTTLS)
    pub port: u16,
    /// SMTP username
    pub username: String,
    /// SMTP password
    pub password: String,
    /// Use STARTTLS
    pub use_tls: bool,
}

impl SmtpConfig {
    /// Read configuration from `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`,
    /// `SMTP_PASSWORD`, and `SMTP_USE_TLS`
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Config` if a required variable is missing or
    /// the port is not a number.
    pub fn from_env() -> Result<Self, EmailError> {
        let host = std::env::var("SMTP_HOST")
            .map_err(|_| EmailError::config("SMTP_HOST environment variable not set"))?;

        let port = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .map_err(|_| EmailError::config("SMTP_PORT must be a valid port number"))?;

        let username = std::env::var("SMTP_USERNAME")
            .map_err(|_| EmailError::config("SMTP_USERNAME environment variable not set"))?;

        let password = std::env::var("SMTP_PASSWORD")
            .map_err(|_| EmailError::config("SMTP_PASSWORD environment variable not set"))?;

        let use_tls = std::env::var("SMTP_USE_TLS")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        Ok(Self {
            host,
            port,
            username,
            password,
            use_tls,
        })
    }
}

/// SMTP email backend
pub struct SmtpBackend {
    config: SmtpConfig,
}

impl SmtpBackend {
    /// Create a backend with the given relay configuration
    #[must_use]
    pub const fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Create a backend from `SMTP_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Config` if required variables are missing.
    pub fn from_env() -> Result<Self, EmailError> {
        Ok(Self::new(SmtpConfig::from_env()?))
    }

    fn build_message(email: &Email) -> Result<Message, EmailError> {
        email.validate()?;

        let from_addr = email.from.as_ref().ok_or(EmailError::NoSender)?;
        let from: Mailbox = from_addr
            .parse()
            .map_err(|_| EmailError::InvalidAddress(from_addr.clone()))?;

        let mut builder = Message::builder().from(from);

        for to_addr in &email.to {
            let to: Mailbox = to_addr
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to_addr.clone()))?;
            builder = builder.to(to);
        }

        if let Some(reply_to_addr) = &email.reply_to {
            let reply_to: Mailbox = reply_to_addr
                .parse()
                .map_err(|_| EmailError::InvalidAddress(reply_to_addr.clone()))?;
            builder = builder.reply_to(reply_to);
        }

        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;
        builder = builder.subject(subject);

        let message = if let (Some(html), Some(text)) = (&email.html, &email.text) {
            builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(header::ContentType::TEXT_PLAIN)
                                .body(text.clone()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(header::ContentType::TEXT_HTML)
                                .body(html.clone()),
                        ),
                )
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else if let Some(html) = &email.html {
            builder
                .header(header::ContentType::TEXT_HTML)
                .body(html.clone())
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else if let Some(text) = &email.text {
            builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(text.clone())
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else {
            return Err(EmailError::NoContent);
        };

        Ok(message)
    }

    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let credentials = Credentials::new(
            self.config.username.clone(),
            self.config.password.clone(),
        );

        let transport = if self.config.use_tls {
            let tls_parameters = TlsParameters::new(self.config.host.clone())
                .map_err(|e| EmailError::smtp(format!("TLS parameters error: {e}")))?;

            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
                .map_err(|e| EmailError::smtp(e.to_string()))?
                .credentials(credentials)
                .tls(Tls::Required(tls_parameters))
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
                .credentials(credentials)
        };

        Ok(transport.port(self.config.port).build())
    }
}

#[async_trait]
impl EmailSender for SmtpBackend {
    async fn send(&self, email: Email) -> Result<DeliveryReceipt, EmailError> {
        let message = Self::build_message(&email)?;
        let transport = self.create_transport()?;

        let response = transport
            .send(message)
            .await
            .map_err(|e| EmailError::smtp(e.to_string()))?;

        tracing::debug!(code = %response.code(), "smtp relay accepted email");

        // SMTP has no provider message id to echo.
        Ok(DeliveryReceipt::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "user".to_string(),
            password: "pass".to_string(),
            use_tls: true,
        }
    }

    #[test]
    fn build_message_with_both_bodies() {
        let email = Email::new()
            .to("inbox@example.com")
            .from("leads@example.com")
            .reply_to("jane@x.com")
            .subject("New Lead")
            .text("Name: Jane")
            .html("<p>Name: Jane</p>");

        let message = SmtpBackend::build_message(&email);
        assert!(message.is_ok());
    }

    #[test]
    fn build_message_rejects_bad_from_address() {
        let email = Email::new()
            .to("inbox@example.com")
            .from("not an address")
            .subject("New Lead")
            .text("hi");

        let result = SmtpBackend::build_message(&email);
        assert!(matches!(result, Err(EmailError::InvalidAddress(_))));
    }

    #[test]
    fn build_message_rejects_incomplete_email() {
        let email = Email::new().to("inbox@example.com").from("leads@example.com");
        let result = SmtpBackend::build_message(&email);
        assert!(matches!(result, Err(EmailError::NoSubject)));
    }

    #[tokio::test]
    async fn transport_builds_from_config() {
        let backend = SmtpBackend::new(test_config());
        assert!(backend.create_transport().is_ok());
    }
}
