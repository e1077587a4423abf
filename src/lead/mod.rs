//! Lead submission entity and validation rules
//!
//! A [`LeadSubmission`] is transient: deserialized from a request, validated,
//! rendered into an email, and discarded. It is never stored.
//!
//! The validation shapes deliberately stay permissive, matching what the
//! public forms accept: any `local@domain.tld`-looking email and any phone
//! built from digits, `+`, spaces, dashes, and parentheses.

use askama::Template;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::email::{EmailError, EmailTemplate};

/// Email shape: something before `@`, something after, a dotted tld
pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));

/// Phone shape: optional leading `+`, then digits/spaces/dashes/parentheses
pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("phone regex compiles"));

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// A prospective customer's contact details, as submitted through a form
///
/// Missing JSON fields default to empty strings so required-ness is reported
/// as a validation error rather than a deserialization failure, matching the
/// behavior of the public endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    /// Submitter's full name
    #[validate(custom(function = not_blank, message = "Name is required"))]
    pub name: String,

    /// Submitter's email address
    #[validate(
        custom(function = not_blank, message = "Email is required"),
        regex(path = *EMAIL_RE, code = "email_format", message = "Invalid email format")
    )]
    pub email: String,

    /// Submitter's phone number
    #[validate(
        custom(function = not_blank, message = "Phone is required"),
        regex(path = *PHONE_RE, code = "phone_format", message = "Invalid phone format")
    )]
    pub phone: String,

    /// Optional free-text message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Label identifying which form produced the submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_type: Option<String>,
}

impl LeadSubmission {
    /// Short label used in subjects and headings ("Lead" when unlabelled)
    #[must_use]
    pub fn kind_label(&self) -> &str {
        self.form_type
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Lead")
    }

    /// Full label used in the body's form-type line
    #[must_use]
    pub fn form_type_label(&self) -> &str {
        self.form_type
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("General Lead")
    }

    /// Message text, if one was actually written
    #[must_use]
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Subject line for the notification email
    #[must_use]
    pub fn subject(&self, site: &str) -> String {
        format!("{site} - New {} from {}", self.kind_label(), self.name)
    }

    /// Build the notification email body templates for this submission
    #[must_use]
    pub fn notification(&self, site: &str) -> LeadNotification {
        LeadNotification {
            kind: self.kind_label().to_string(),
            form_type: self.form_type_label().to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message_text().map(ToString::to_string),
            site: site.to_string(),
            submitted_at: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// Single-message summary of a failed submission, as the JSON API reports it
///
/// Missing required fields take precedence over shape failures, then email
/// shape over phone shape, mirroring the order the checks are described in.
#[must_use]
pub fn submission_error_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    let has_code = |field: &str, code: &str| {
        fields
            .get(field)
            .is_some_and(|errs| errs.iter().any(|e| e.code == code))
    };

    if has_code("name", "required") || has_code("email", "required") || has_code("phone", "required")
    {
        "Missing required fields".to_string()
    } else if fields.contains_key("email") {
        "Invalid email format".to_string()
    } else {
        "Invalid phone format".to_string()
    }
}

/// Notification email rendered for one lead submission
///
/// The HTML body comes from an Askama template, so submitted text is
/// autoescaped on the way in. The plain-text alternative needs no escaping.
#[derive(Debug, Clone, Template)]
#[template(path = "emails/lead_notification.html")]
pub struct LeadNotification {
    /// Short form label ("Lead", "Contact Form", ...)
    pub kind: String,
    /// Full form-type line label
    pub form_type: String,
    /// Submitted name
    pub name: String,
    /// Submitted email address
    pub email: String,
    /// Submitted phone number
    pub phone: String,
    /// Submitted message, when present
    pub message: Option<String>,
    /// Site label for the source line
    pub site: String,
    /// Render timestamp
    pub submitted_at: String,
}

impl EmailTemplate for LeadNotification {
    fn render_email(&self) -> Result<(Option<String>, Option<String>), EmailError> {
        let html = self.render()?;

        let mut text = format!(
            "New {} Form Submission - {}\n\nName: {}\nEmail: {}\nPhone: {}\n",
            self.kind, self.site, self.name, self.email, self.phone
        );
        if let Some(message) = &self.message {
            text.push_str(&format!("Message: {message}\n"));
        }
        text.push_str(&format!(
            "Form Type: {}\nSource: {}\nTimestamp: {}\n",
            self.form_type, self.site, self.submitted_at
        ));

        Ok((Some(html), Some(text)))
    }
}
