//! # pay-core
//!
//! Core types and traits for the PayPal checkout relay.
//!
//! This crate provides:
//! - `OrderProvider` trait implemented by payment providers
//! - `Credentials` and `AccessToken` for the client-credentials exchange
//! - `Cart` and `OrderRequest` for order creation
//! - `translate` for turning a raw provider response into a relayable result
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{translate, Cart, OrderProvider};
//!
//! let token = provider.acquire_token().await.ok();
//! let raw = provider.create_order(&cart, token.as_ref()).await?;
//! let result = translate(raw)?;
//!
//! // Write result.json_body with result.status_code
//! ```

pub mod auth;
pub mod error;
pub mod order;
pub mod provider;
pub mod response;

// Re-exports for convenience
pub use auth::{AccessToken, Credentials};
pub use error::{PaymentError, PaymentResult};
pub use order::{Amount, Cart, OrderIntent, OrderRequest, PurchaseUnit};
pub use provider::{BoxedOrderProvider, OrderProvider};
pub use response::{translate, ProviderResponse, TranslatedResult};
