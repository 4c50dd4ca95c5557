//! # PayPal Provider
//!
//! `OrderProvider` implementation composing the token exchange and the
//! order gateway over one shared HTTP client.

use crate::config::PayPalConfig;
use crate::orders::OrderGateway;
use crate::token::TokenProvider;
use crate::PROVIDER;
use async_trait::async_trait;
use pay_core::{AccessToken, Cart, OrderProvider, PaymentError, PaymentResult, ProviderResponse};
use reqwest::Client;

pub struct PayPalProvider {
    config: PayPalConfig,
    tokens: TokenProvider,
    orders: OrderGateway,
}

impl PayPalProvider {
    /// Create a new PayPal provider.
    ///
    /// No request timeout is configured; reqwest's defaults apply.
    pub fn new(config: PayPalConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("checkout-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PaymentError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    /// Create with a caller-supplied client
    pub fn with_client(client: Client, config: PayPalConfig) -> Self {
        let tokens = TokenProvider::new(client.clone(), &config);
        let orders = OrderGateway::new(client, &config);

        Self {
            config,
            tokens,
            orders,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        Self::new(PayPalConfig::from_env())
    }

    pub fn config(&self) -> &PayPalConfig {
        &self.config
    }
}

#[async_trait]
impl OrderProvider for PayPalProvider {
    async fn acquire_token(&self) -> PaymentResult<AccessToken> {
        self.tokens.acquire_token().await
    }

    async fn create_order(
        &self,
        cart: &Cart,
        token: Option<&AccessToken>,
    ) -> PaymentResult<ProviderResponse> {
        self.orders.create_order(cart, token).await
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
