//! # Order Provider Trait
//!
//! The seam between the HTTP endpoint and a payment provider's REST API.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │             OrderProvider (trait)            │
//! │  ├── acquire_token()                         │
//! │  ├── create_order()                          │
//! │  └── provider_name()                         │
//! └──────────────────────────────────────────────┘
//!                        ▲
//!                ┌───────┴────────┐
//!                │ PayPalProvider │
//!                └────────────────┘
//! ```
//!
//! Implementations are stateless between calls: every checkout request
//! acquires its own token and builds its own order payload.

use crate::auth::AccessToken;
use crate::error::PaymentResult;
use crate::order::Cart;
use crate::response::ProviderResponse;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait OrderProvider: Send + Sync {
    /// Exchange client credentials for a bearer token.
    ///
    /// Must fail with `PaymentError::Configuration` before any network
    /// call when the credentials are incomplete.
    async fn acquire_token(&self) -> PaymentResult<AccessToken>;

    /// Send an order-creation request and return the provider's response
    /// unaltered, whatever its status.
    ///
    /// `token` may be absent when acquisition failed upstream; the call is
    /// still made and the provider answers with its authentication error.
    async fn create_order(
        &self,
        cart: &Cart,
        token: Option<&AccessToken>,
    ) -> PaymentResult<ProviderResponse>;

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedOrderProvider = Arc<dyn OrderProvider>;
