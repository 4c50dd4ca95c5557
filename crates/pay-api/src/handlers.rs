//! # Request Handlers
//!
//! Axum request handlers for the checkout relay.
//!
//! `create_order` walks one request through
//! `Received → TokenAcquired → OrderRequested → Translated → Responded`.
//! Each step returns a `PaymentResult` and the handler matches on it to pick
//! the client-facing status.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use pay_core::{translate, Cart, OrderProvider, PaymentError, PaymentResult, TranslatedResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Generic body for this service's own failures
pub const FAILED_TO_CREATE_ORDER: &str = "Failed to create order.";
pub const MISSING_CART: &str = "Missing cart in request body.";
pub const INVALID_JSON_BODY: &str = "Invalid JSON body.";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Body of `POST /api/orders`
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Cart from the checkout page; `null` counts as absent
    #[serde(default)]
    pub cart: Option<Cart>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// Map this service's own failures to a client response.
///
/// Bad requests keep their message; everything else collapses to the
/// generic order failure body.
fn payment_error_to_response(err: &PaymentError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match err {
        PaymentError::InvalidRequest(message) => error_response(status, message),
        _ => error_response(status, FAILED_TO_CREATE_ORDER),
    }
}

/// Write the provider's body back with the provider's status
fn relay(result: TranslatedResult) -> Response {
    match StatusCode::from_u16(result.status_code) {
        Ok(status) => (status, Json(result.json_body)).into_response(),
        Err(_) => {
            error!("Provider returned an invalid status code: {}", result.status_code);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, FAILED_TO_CREATE_ORDER)
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "checkout-relay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Serve the checkout page
pub async fn checkout_page(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&state.config.checkout_page).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!(
                "Checkout page {} unavailable: {}",
                state.config.checkout_page.display(),
                e
            );
            error_response(StatusCode::NOT_FOUND, "Checkout page not found.")
        }
    }
}

/// Create an order and relay the provider's answer
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected order request body: {}", rejection);
            let err = PaymentError::InvalidRequest(INVALID_JSON_BODY.to_string());
            return payment_error_to_response(&err);
        }
    };

    let Some(cart) = request.cart else {
        warn!("Order request without a cart");
        let err = PaymentError::InvalidRequest(MISSING_CART.to_string());
        return payment_error_to_response(&err);
    };

    match create_order_internal(state.provider.as_ref(), &cart).await {
        Ok(result) => {
            info!(
                "Relaying {} order response: status={}",
                state.provider.provider_name(),
                result.status_code
            );
            relay(result)
        }
        Err(e) => {
            error!("Failed to create order: {}", e);
            payment_error_to_response(&e)
        }
    }
}

/// Token → order → translate.
///
/// A failed token exchange does not stop the order call; the provider
/// rejects the empty bearer and that rejection is relayed like any other
/// provider status.
async fn create_order_internal(
    provider: &dyn OrderProvider,
    cart: &Cart,
) -> PaymentResult<TranslatedResult> {
    let token = match provider.acquire_token().await {
        Ok(token) => Some(token),
        Err(e) => {
            debug!("Continuing without access token: {}", e);
            None
        }
    };

    let raw = provider.create_order(cart, token.as_ref()).await?;

    translate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    #[test]
    fn test_error_response() {
        let body = serde_json::to_value(ErrorResponse::new(FAILED_TO_CREATE_ORDER)).unwrap();
        assert_eq!(body, json!({ "error": "Failed to create order." }));
    }

    #[test]
    fn test_null_cart_counts_as_missing() {
        let request: CreateOrderRequest = serde_json::from_value(json!({ "cart": null })).unwrap();
        assert!(request.cart.is_none());

        let request: CreateOrderRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.cart.is_none());

        let request: CreateOrderRequest =
            serde_json::from_value(json!({ "cart": [{ "id": "sku" }] })).unwrap();
        assert!(request.cart.is_some());
    }

    #[tokio::test]
    async fn test_relay_keeps_provider_status() {
        let response = relay(TranslatedResult {
            json_body: json!({ "name": "UNPROCESSABLE_ENTITY" }),
            status_code: 422,
        });

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "name": "UNPROCESSABLE_ENTITY" }));
    }

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_request_keeps_message_and_400() {
        let err = PaymentError::InvalidRequest(MISSING_CART.to_string());
        let response = payment_error_to_response(&err);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            json!({ "error": "Missing cart in request body." })
        );
    }

    #[tokio::test]
    async fn test_internal_errors_collapse_to_generic_500() {
        for err in [
            PaymentError::Transport("dns failure".into()),
            PaymentError::Configuration("MISSING_API_CREDENTIALS".into()),
            PaymentError::provider("paypal", "<html>Bad Gateway</html>"),
        ] {
            let response = payment_error_to_response(&err);

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                body_of(response).await,
                json!({ "error": "Failed to create order." })
            );
        }
    }

    #[test]
    fn test_relay_rejects_impossible_status() {
        let response = relay(TranslatedResult {
            json_body: json!({}),
            status_code: 42,
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
