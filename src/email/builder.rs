//! Email builder with fluent API

use serde::{Deserialize, Serialize};

use super::{EmailError, EmailTemplate};

/// An outbound email message
///
/// ```rust
/// use leadgate::email::Email;
///
/// let email = Email::new()
///     .to("inbox@example.com")
///     .from("leads@example.com")
///     .reply_to("jane@x.com")
///     .subject("New Lead from Jane Doe")
///     .text("Name: Jane Doe");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Email {
    /// Recipients (To)
    pub to: Vec<String>,

    /// Sender (From)
    pub from: Option<String>,

    /// Reply-To address (set to the lead's own address so a reply reaches
    /// the prospect directly)
    pub reply_to: Option<String>,

    /// Subject line
    pub subject: Option<String>,

    /// Plain text body
    pub text: Option<String>,

    /// HTML body
    pub html: Option<String>,
}

impl Email {
    /// Create a new empty email
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an email with its bodies rendered from a template
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Template` if the template fails to render.
    pub fn from_template<T: EmailTemplate>(template: &T) -> Result<Self, EmailError> {
        let (html, text) = template.render_email()?;

        let mut email = Self::new();
        if let Some(html) = html {
            email = email.html(&html);
        }
        if let Some(text) = text {
            email = email.text(&text);
        }

        Ok(email)
    }

    /// Add a recipient (To)
    #[must_use]
    pub fn to(mut self, address: &str) -> Self {
        self.to.push(address.to_string());
        self
    }

    /// Set the sender (From)
    #[must_use]
    pub fn from(mut self, address: &str) -> Self {
        self.from = Some(address.to_string());
        self
    }

    /// Set the reply-to address
    #[must_use]
    pub fn reply_to(mut self, address: &str) -> Self {
        self.reply_to = Some(address.to_string());
        self
    }

    /// Set the subject line
    #[must_use]
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the plain text body
    #[must_use]
    pub fn text(mut self, body: &str) -> Self {
        self.text = Some(body.to_string());
        self
    }

    /// Set the HTML body
    #[must_use]
    pub fn html(mut self, body: &str) -> Self {
        self.html = Some(body.to_string());
        self
    }

    /// Check that all required fields are present
    ///
    /// # Errors
    ///
    /// Returns an error if recipients, sender, subject, or both bodies are
    /// missing.
    pub fn validate(&self) -> Result<(), EmailError> {
        if self.to.is_empty() {
            return Err(EmailError::NoRecipients);
        }
        if self.from.is_none() {
            return Err(EmailError::NoSender);
        }
        if self.subject.is_none() {
            return Err(EmailError::NoSubject);
        }
        if self.text.is_none() && self.html.is_none() {
            return Err(EmailError::NoContent);
        }
        Ok(())
    }
}
