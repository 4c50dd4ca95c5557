//! # pay-paypal
//!
//! PayPal REST provider for the checkout relay.
//!
//! Two calls per checkout:
//!
//! 1. **TokenProvider** - `POST /v1/oauth2/token`
//!    - Basic auth with the REST app's client id/secret
//!    - `grant_type=client_credentials`
//!    - A fresh token on every call, never cached
//!
//! 2. **OrderGateway** - `POST /v2/checkout/orders`
//!    - Bearer auth with the token from step 1
//!    - Single CAPTURE purchase unit
//!    - Response returned unaltered, including 4xx/5xx
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_paypal::PayPalProvider;
//! use pay_core::{translate, OrderProvider};
//!
//! let provider = PayPalProvider::from_env()?;
//!
//! let token = provider.acquire_token().await.ok();
//! let raw = provider.create_order(&cart, token.as_ref()).await?;
//! let result = translate(raw)?;
//! ```

pub mod config;
pub mod orders;
pub mod provider;
pub mod token;

/// Provider name used in logs and errors
pub const PROVIDER: &str = "paypal";

// Re-exports
pub use config::{PayPalConfig, LIVE_API_BASE_URL, SANDBOX_API_BASE_URL};
pub use orders::{OrderGateway, MOCK_RESPONSE_HEADER};
pub use provider::PayPalProvider;
pub use token::TokenProvider;
