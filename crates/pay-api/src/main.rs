//! # Checkout Relay
//!
//! Bridges a storefront checkout page to the PayPal REST API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export PAYPAL_CLIENT_ID=...
//! export PAYPAL_CLIENT_SECRET=...
//!
//! # Run the server
//! checkout-relay
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::new()?;

    let addr = state.config.bind_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider.provider_name());

    let app = routes::create_router(state);

    info!("Checkout relay starting on http://{}", addr);

    if !is_prod {
        info!("Checkout page: GET http://{}/", addr);
        info!("Create order: POST http://{}/api/orders", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Checkout Relay
  ━━━━━━━━━━━━━━━━━━━━━━━
  PayPal orders bridge
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
