//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the payment provider and the server configuration; nothing in it
//! changes after startup.

use pay_core::BoxedOrderProvider;
use pay_paypal::PayPalProvider;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// HTML file served at `/`
    pub checkout_page: PathBuf,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8888),
            checkout_page: lookup("CHECKOUT_PAGE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("checkout.html")),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        }
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider used by the checkout endpoint
    pub provider: BoxedOrderProvider,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by PayPal, configured from the environment
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let paypal = PayPalProvider::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize PayPal: {}", e))?;

        info!(
            "PayPal API: {} (sandbox: {})",
            paypal.config().api_base_url,
            paypal.config().is_sandbox()
        );

        if !paypal.config().credentials.is_complete() {
            warn!("PAYPAL_CLIENT_ID / PAYPAL_CLIENT_SECRET not set; every order will fail authentication");
        }

        Ok(Self::with_provider(Arc::new(paypal), config))
    }

    /// Create with an explicit provider (tests, alternative providers)
    pub fn with_provider(provider: BoxedOrderProvider, config: AppConfig) -> Self {
        Self { provider, config }
    }
}
