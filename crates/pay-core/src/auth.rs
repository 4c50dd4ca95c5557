//! # Client Credentials and Access Tokens
//!
//! Types for the OAuth 2.0 client-credentials exchange.
//! Credentials are loaded once at startup; tokens live for a single request.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::fmt;

/// Client id/secret pair issued by the provider
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Both halves are present and non-empty
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    /// `Basic base64(client_id:client_secret)` for the token endpoint
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Bearer credential returned by the token endpoint.
///
/// Only `value` is used for subsequent calls. `expires_in` is kept for
/// logging; tokens are never cached or reused across requests.
#[derive(Clone, Deserialize)]
pub struct AccessToken {
    #[serde(rename = "access_token")]
    pub value: String,

    #[serde(default)]
    pub token_type: Option<String>,

    /// Lifetime in seconds as reported by the provider
    #[serde(default)]
    pub expires_in: Option<i64>,

    #[serde(skip, default = "Utc::now")]
    pub issued_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            token_type: None,
            expires_in: None,
            issued_at: Utc::now(),
        }
    }

    /// When the provider says this token stops working, if it told us
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_in
            .map(|secs| self.issued_at + Duration::seconds(secs))
    }

    /// `Authorization` header value for an order call.
    ///
    /// An absent token still produces a header (`"Bearer "`); the provider
    /// then rejects the call with its own authentication error.
    pub fn bearer_header(token: Option<&AccessToken>) -> String {
        format!("Bearer {}", token.map(|t| t.value.as_str()).unwrap_or(""))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("issued_at", &self.issued_at)
            .finish()
    }
}
