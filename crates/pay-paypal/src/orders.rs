//! # Order Creation
//!
//! `POST /v2/checkout/orders` with a bearer token.
//! See <https://developer.paypal.com/docs/api/orders/v2/#orders_create>.

use crate::config::PayPalConfig;
use crate::PROVIDER;
use pay_core::{AccessToken, Amount, Cart, OrderRequest, PaymentError, PaymentResult, ProviderResponse};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Sandbox negative-testing header.
/// See <https://developer.paypal.com/tools/sandbox/negative-testing/request-headers/>.
pub const MOCK_RESPONSE_HEADER: &str = "PayPal-Mock-Response";

/// Sends order-creation requests and hands back whatever PayPal answered
#[derive(Debug, Clone)]
pub struct OrderGateway {
    client: Client,
    orders_url: String,
    amount: Amount,
    mock_response: Option<String>,
}

impl OrderGateway {
    pub fn new(client: Client, config: &PayPalConfig) -> Self {
        Self {
            client,
            orders_url: config.orders_url(),
            amount: config.order_amount.clone(),
            mock_response: config.mock_response.clone(),
        }
    }

    /// The payload sent for every order. The cart does not influence it.
    pub fn build_order(&self) -> OrderRequest {
        OrderRequest::capture(self.amount.clone())
    }

    /// Create an order. Any HTTP status from PayPal is returned as-is;
    /// only network failures are errors.
    #[instrument(skip(self, cart, token), fields(amount = %self.amount))]
    pub async fn create_order(
        &self,
        cart: &Cart,
        token: Option<&AccessToken>,
    ) -> PaymentResult<ProviderResponse> {
        info!(
            "Shopping cart information passed from the frontend: {}",
            cart.describe()
        );

        let order = self.build_order();

        let mut request = self
            .client
            .post(&self.orders_url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, AccessToken::bearer_header(token))
            .json(&order);

        if let Some(ref mock) = self.mock_response {
            request = request.header(MOCK_RESPONSE_HEADER, mock);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        debug!("PayPal order response: status={}", status);

        let raw = ProviderResponse::new(PROVIDER, status, body);
        Ok(match content_type {
            Some(ct) => raw.with_content_type(ct),
            None => raw,
        })
    }
}
