//! # pay-api
//!
//! HTTP API layer for the PayPal checkout relay.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The order-creation endpoint used by the checkout page
//! - Static hosting of the checkout page itself
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Checkout page |
//! | GET | `/health` | Health check |
//! | POST | `/api/orders` | Create a PayPal order, relay PayPal's response |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
