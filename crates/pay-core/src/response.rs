//! # Provider Response Translation
//!
//! Normalizes a raw provider HTTP response into the body and status that
//! are relayed to the browser. Provider 4xx/5xx statuses are not errors
//! here: they are forwarded exactly like a 201.

use crate::error::{PaymentError, PaymentResult};
use serde_json::Value;

/// Raw provider response, captured unaltered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    /// Name of the provider that produced it (for error context)
    pub provider: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl ProviderResponse {
    pub fn new(provider: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            status,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parsed body plus the provider's status, ready to write back to the client
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedResult {
    pub json_body: Value,
    pub status_code: u16,
}

/// Parse the provider body as JSON and forward the status verbatim.
///
/// A body that is not JSON becomes a `Provider` error carrying the raw text.
pub fn translate(response: ProviderResponse) -> PaymentResult<TranslatedResult> {
    match serde_json::from_str::<Value>(&response.body) {
        Ok(json_body) => Ok(TranslatedResult {
            json_body,
            status_code: response.status,
        }),
        Err(_) => Err(PaymentError::Provider {
            provider: response.provider,
            message: response.body,
        }),
    }
}
