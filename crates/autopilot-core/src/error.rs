//! Error types for the lead capture flow

use thiserror::Error;

use crate::content::{PHONE_HINT, SUBMIT_FAILED_MESSAGE};

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Lead capture errors, grouped by the stage that produced them
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Validation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid phone number: {input:?}")]
    InvalidPhone { input: String },

    // ─────────────────────────────────────────────────────────────
    // Bot-Mitigation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("reCAPTCHA token unavailable: {reason}")]
    TokenUnavailable { reason: String },

    #[error("Failed to load reCAPTCHA script: {message}")]
    ScriptLoad { message: String },

    // ─────────────────────────────────────────────────────────────
    // Submission Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Lead request failed: {message}")]
    Transport { message: String },

    #[error("Failed to submit: HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn invalid_phone(input: impl Into<String>) -> Self {
        Self::InvalidPhone {
            input: input.into(),
        }
    }

    pub fn token_unavailable(reason: impl Into<String>) -> Self {
        Self::TokenUnavailable {
            reason: reason.into(),
        }
    }

    pub fn script_load(message: impl Into<String>) -> Self {
        Self::ScriptLoad {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Rejected before any network activity
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidPhone { .. })
    }

    /// Failed while talking to the webhook
    pub fn is_submission(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::Status { .. } | Error::Json(_)
        )
    }

    /// Text safe to show the visitor. Raw error detail never leaves the log.
    pub fn user_message(&self) -> &'static str {
        if self.is_validation() {
            PHONE_HINT
        } else {
            SUBMIT_FAILED_MESSAGE
        }
    }
}
