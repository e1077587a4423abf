//! Email delivery with pluggable backends
//!
//! One lead submission becomes one outbound email. Backends:
//! - [`ResendBackend`] — Resend HTTP API (production default)
//! - [`SmtpBackend`] — plain SMTP relay via `lettre`
//! - [`ConsoleBackend`] — logs instead of sending (development)
//!
//! Bodies are rendered from Askama templates (see [`EmailTemplate`]); the
//! handler layer never interpolates submitted text into HTML by hand.

mod backend;
mod builder;
mod error;
mod sender;
mod template;

pub use backend::{console::ConsoleBackend, resend::ResendBackend, smtp::SmtpBackend};
pub use builder::Email;
pub use error::EmailError;
pub use sender::{DeliveryReceipt, EmailSender};
pub use template::EmailTemplate;

#[cfg(test)]
pub use sender::MockEmailSender;
