//! Email template trait for Askama integration
//!
//! Askama's autoescaping is what keeps user-supplied text inert in the HTML
//! body, so all HTML email content goes through a template rather than
//! string interpolation.

use super::EmailError;

/// Trait for email templates rendered with Askama
///
/// Returns `(html, text)` bodies; either may be `None`, but at least one
/// should be present for the email to validate.
pub trait EmailTemplate {
    /// Render the email bodies
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Template` if rendering fails.
    fn render_email(&self) -> Result<(Option<String>, Option<String>), EmailError>;
}
