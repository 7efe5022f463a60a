//! # Checkout Gateway
//!
//! Minimal web backend: serves the static marketing pages and proxies
//! checkout-session creation to Stripe.
//!
//! ## Usage
//!
//! ```bash
//! export STRIPE_SECRET_KEY=sk_test_...
//! export STATIC_DIR=./static
//! export DOMAIN=https://shop.example.com
//!
//! checkout-gateway
//! ```

use checkout_api::{routes, state::AppState};
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

    // Fails fast on missing configuration: no listener until this succeeds
    let state = AppState::new()?;
    let addr = state.config.socket_addr()?;
    let domain = state.config.domain.clone();

    info!("Static assets: {}", state.config.static_dir.display());
    info!("Payment provider: {}", state.provider.provider_name());

    let app = routes::create_router(state);

    info!("🚀 Checkout gateway listening on http://{}", addr);
    info!("🌍 App URL: {}", domain);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
