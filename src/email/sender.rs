//! Email sender trait abstraction

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{Email, EmailError};

/// Provider acknowledgment for a delivered email
///
/// Echoed back to API clients under `data` in the success response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Provider-assigned message id, when the backend has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DeliveryReceipt {
    /// Receipt with a provider message id
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// Trait for sending emails
///
/// Implemented by all delivery backends (Resend, SMTP, console).
///
/// # Examples
///
/// ```rust,no_run
/// use leadgate::email::{ConsoleBackend, Email, EmailSender};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let sender = ConsoleBackend::new();
///
/// let email = Email::new()
///     .to("inbox@example.com")
///     .from("leads@example.com")
///     .subject("New Lead")
///     .text("Name: Jane Doe");
///
/// let receipt = sender.send(email).await?;
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an email
    ///
    /// # Errors
    ///
    /// Returns `EmailError` if the email is invalid or cannot be delivered.
    async fn send(&self, email: Email) -> Result<DeliveryReceipt, EmailError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_sender_works_as_trait_object() {
        let mut mock = MockEmailSender::new();
        mock.expect_send()
            .returning(|_| Ok(DeliveryReceipt::with_id("id-1")));

        let sender: Box<dyn EmailSender> = Box::new(mock);
        let receipt = sender.send(Email::new()).await.unwrap();
        assert_eq!(receipt.id.as_deref(), Some("id-1"));
    }
}
