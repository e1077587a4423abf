//! leadgate: lead-capture relay service
//!
//! Accepts prospective-customer enquiries (name, email, phone, optional
//! message) over HTTP, validates them, and forwards each one as a
//! transactional email to a fixed inbox. Submissions are never persisted;
//! a lead lives for exactly one request.
//!
//! Two submission surfaces share the same validation and delivery path:
//!
//! - `POST /api/send-email` — JSON API used by scripted clients
//! - `GET`/`POST /enquire` — server-rendered HTMX form fragments with
//!   per-field error feedback
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use leadgate::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     leadgate::observability::init()?;
//!
//!     let config = AppConfig::load()?;
//!     let state = AppState::new(config)?;
//!     let app = leadgate::handlers::router(state);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod email;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod health;
pub mod lead;
pub mod observability;
pub mod state;

pub mod prelude {
    //! Convenience re-exports for common types and traits

    pub use crate::config::AppConfig;
    pub use crate::email::{
        ConsoleBackend, DeliveryReceipt, Email, EmailError, EmailSender, EmailTemplate,
        ResendBackend, SmtpBackend,
    };
    pub use crate::error::AppError;
    pub use crate::forms::{FieldError, ValidationErrors};
    pub use crate::lead::LeadSubmission;
    pub use crate::state::AppState;

    // Re-export key dependencies
    pub use axum;
    pub use serde_json::json;
    pub use validator;
}
