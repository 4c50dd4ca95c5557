//! # Routes
//!
//! Axum router configuration for the checkout relay.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /            - Checkout page
/// - GET  /health      - Health check
/// - POST /api/orders  - Create a PayPal order for the posted cart
pub fn create_router(state: AppState) -> Router {
    // The checkout page may be hosted elsewhere during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new().route("/orders", post(handlers::create_order));

    Router::new()
        .route("/", get(handlers::checkout_page))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use pay_core::{AccessToken, Cart, OrderProvider, PaymentError, PaymentResult, ProviderResponse};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct UnreachableProvider;

    #[async_trait]
    impl OrderProvider for UnreachableProvider {
        async fn acquire_token(&self) -> PaymentResult<AccessToken> {
            Err(PaymentError::Transport("unreachable".into()))
        }

        async fn create_order(
            &self,
            _cart: &Cart,
            _token: Option<&AccessToken>,
        ) -> PaymentResult<ProviderResponse> {
            Err(PaymentError::Transport("unreachable".into()))
        }

        fn provider_name(&self) -> &'static str {
            "unreachable"
        }
    }

    fn app() -> Router {
        create_router(AppState::with_provider(
            Arc::new(UnreachableProvider),
            AppConfig::default(),
        ))
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_orders_route_only_accepts_post() {
        let response = app()
            .oneshot(Request::get("/api/orders").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_orders_route_is_wired() {
        let response = app()
            .oneshot(
                Request::post("/api/orders")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"cart":[]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
