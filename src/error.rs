//! Error types for the shell around the wizard core.
//!
//! Field and step problems are never errors here: they are [`ValidationError`]
//! values shown inline. `ConciergeError` covers what can really fail, which is
//! reading files, loading configuration and handing a link to the mail client.

use thiserror::Error;

use crate::wizard::ValidationError;

#[derive(Debug, Error)]
pub enum ConciergeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("step {step} ({id}) is incomplete: {message}")]
    IncompleteStep {
        step: usize,
        id: &'static str,
        message: ValidationError,
    },

    #[error("contact details are incomplete: {0}")]
    Contact(ValidationError),

    #[error("could not open mail client: {0}")]
    Launch(String),
}

pub type Result<T> = std::result::Result<T, ConciergeError>;
