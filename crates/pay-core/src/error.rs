//! # Payment Error Types
//!
//! Typed error handling for the checkout relay.
//! Every fallible step returns `Result<T, PaymentError>` and the HTTP layer
//! decides what the browser sees by matching on the variant.

use thiserror::Error;

/// Core error type for all provider operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Missing or unusable configuration (e.g. empty client credentials)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data sent by the browser
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network/HTTP failure talking to the provider
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered with something we cannot use.
    /// `message` carries the raw response body where there is one.
    #[error("Provider error [{provider}]: {message}")]
    Provider { provider: String, message: String },
}

impl PaymentError {
    /// Shorthand for a `Provider` error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Returns true if a caller could reasonably try again.
    /// The relay itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::Transport(_))
    }

    /// Returns the HTTP status code this error collapses to at the API boundary
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::Configuration(_)
            | PaymentError::Transport(_)
            | PaymentError::Provider { .. } => 500,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
