//! Per-field validation errors for the enquiry form flow
//!
//! The JSON API reports a single error string; the HTMX form reports one
//! message under each offending input. This module carries the per-field
//! view and the conversion from `validator`'s error collection.

use std::collections::HashMap;

/// A single validation error for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Human-readable message shown under the input
    pub message: String,
    /// Error code for programmatic handling ("required", "email_format", ...)
    pub code: Option<String>,
}

impl FieldError {
    /// Create a field error with just a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create a field error with a message and code
    #[must_use]
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validation errors keyed by field name
///
/// ```rust
/// use leadgate::forms::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.add("email", "Email is required");
/// assert!(errors.has_field_error("email"));
/// assert_eq!(errors.first_message("email"), Some("Email is required"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: HashMap<String, Vec<FieldError>>,
}

impl ValidationErrors {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert `validator` derive output into per-field display errors
    ///
    /// When a field is both missing and shape-invalid, only the
    /// required-ness message is kept; a blank input failing a format regex
    /// is noise.
    #[must_use]
    pub fn from_validator(errors: &validator::ValidationErrors) -> Self {
        let mut out = Self::new();

        for (field, field_errors) in errors.field_errors() {
            let required = field_errors.iter().find(|e| e.code == "required");
            let shown = required.or_else(|| field_errors.first());

            if let Some(error) = shown {
                let message = error.message.as_ref().map_or_else(
                    || format!("{field} is invalid"),
                    ToString::to_string,
                );
                out.errors
                    .entry(field.to_string())
                    .or_default()
                    .push(FieldError::with_code(message, error.code.to_string()));
            }
        }

        out
    }

    /// Add an error for a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(FieldError::new(message));
    }

    /// Whether any field has errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether a specific field has errors
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// All errors for a field
    #[must_use]
    pub fn for_field(&self, field: &str) -> &[FieldError] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// First message for a field, for single-message display
    #[must_use]
    pub fn first_message(&self, field: &str) -> Option<&str> {
        self.for_field(field).first().map(|e| e.message.as_str())
    }

    /// Total number of errors across all fields
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::LeadSubmission;
    use validator::Validate;

    #[test]
    fn add_and_query() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "Name is required");
        errors.add("phone", "Invalid phone format");

        assert!(errors.has_errors());
        assert_eq!(errors.count(), 2);
        assert!(errors.has_field_error("name"));
        assert!(!errors.has_field_error("email"));
        assert_eq!(errors.first_message("phone"), Some("Invalid phone format"));
        assert!(errors.for_field("email").is_empty());
    }

    #[test]
    fn from_validator_keeps_required_over_shape() {
        let lead = LeadSubmission {
            name: "Jane".to_string(),
            email: String::new(),
            phone: "+61 400 000 000".to_string(),
            message: None,
            form_type: None,
        };
        let errors = ValidationErrors::from_validator(&lead.validate().unwrap_err());

        // Blank email fails both required and the shape regex; only the
        // required message is shown.
        assert_eq!(errors.for_field("email").len(), 1);
        assert_eq!(errors.first_message("email"), Some("Email is required"));
    }

    #[test]
    fn from_validator_maps_shape_messages() {
        let lead = LeadSubmission {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: "no digits here".to_string(),
            message: None,
            form_type: None,
        };
        let errors = ValidationErrors::from_validator(&lead.validate().unwrap_err());
        assert_eq!(errors.first_message("phone"), Some("Invalid phone format"));
        assert!(!errors.has_field_error("email"));
    }
}
