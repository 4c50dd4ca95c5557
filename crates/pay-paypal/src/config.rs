//! # PayPal Configuration
//!
//! Configuration for the PayPal integration.
//! Secrets are loaded from environment variables (or a `.env` file) once at
//! startup and handed to each component at construction time.

use pay_core::{Amount, Credentials};
use std::env;

/// Sandbox REST endpoint, used unless `PAYPAL_BASE_URL` says otherwise
pub const SANDBOX_API_BASE_URL: &str = "https://api-m.sandbox.paypal.com";

/// Live REST endpoint
pub const LIVE_API_BASE_URL: &str = "https://api-m.paypal.com";

/// PayPal API configuration
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    /// REST app client id/secret
    pub credentials: Credentials,

    /// API base URL (sandbox, live, or a mock server in tests)
    pub api_base_url: String,

    /// Amount charged for every order
    pub order_amount: Amount,

    /// Value for the `PayPal-Mock-Response` header (sandbox negative testing)
    pub mock_response: Option<String>,
}

impl PayPalConfig {
    /// Load configuration from environment variables.
    ///
    /// Env vars:
    /// - `PAYPAL_CLIENT_ID`, `PAYPAL_CLIENT_SECRET`
    /// - `PAYPAL_BASE_URL` (optional, defaults to sandbox)
    /// - `PAYPAL_ORDER_CURRENCY`, `PAYPAL_ORDER_VALUE` (optional, default USD 100)
    /// - `PAYPAL_MOCK_RESPONSE` (optional)
    ///
    /// Missing credentials are not rejected here. Token acquisition reports
    /// them as a configuration error on every request.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let credentials = Credentials::new(
            lookup("PAYPAL_CLIENT_ID").unwrap_or_default(),
            lookup("PAYPAL_CLIENT_SECRET").unwrap_or_default(),
        );

        let placeholder = Amount::placeholder();
        let order_amount = Amount::new(
            non_empty("PAYPAL_ORDER_CURRENCY").unwrap_or(placeholder.currency_code),
            non_empty("PAYPAL_ORDER_VALUE").unwrap_or(placeholder.value),
        );

        let config = Self::new(credentials).with_order_amount(order_amount);

        let config = match non_empty("PAYPAL_BASE_URL") {
            Some(url) => config.with_api_base_url(url),
            None => config,
        };

        match non_empty("PAYPAL_MOCK_RESPONSE") {
            Some(mock) => config.with_mock_response(mock),
            None => config,
        }
    }

    /// Create config with explicit credentials against the sandbox
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_base_url: SANDBOX_API_BASE_URL.to_string(),
            order_amount: Amount::placeholder(),
            mock_response: None,
        }
    }

    /// Check if talking to the sandbox
    pub fn is_sandbox(&self) -> bool {
        self.api_base_url.contains("sandbox")
    }

    /// `POST` target for the client-credentials exchange
    pub fn token_url(&self) -> String {
        format!("{}/v1/oauth2/token", self.api_base_url)
    }

    /// `POST` target for order creation
    pub fn orders_url(&self) -> String {
        format!("{}/v2/checkout/orders", self.api_base_url)
    }

    /// Builder: set custom API base URL (live, or a mock server)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: set the amount charged per order
    pub fn with_order_amount(mut self, amount: Amount) -> Self {
        self.order_amount = amount;
        self
    }

    /// Builder: force a sandbox error via `PayPal-Mock-Response`
    pub fn with_mock_response(mut self, mock: impl Into<String>) -> Self {
        self.mock_response = Some(mock.into());
        self
    }
}
