//! # Malibu Checkout
//!
//! Checkout preference service for the Malibu Roleplay store.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export MP_ACCESS_TOKEN=APP_USR-...
//! export URL=https://malibu-rp.com.br
//!
//! # Run the server
//! malibu-checkout
//! ```

use checkout_api::{routes, state::AppState};
use tracing::{info, warn, Level};
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

    // Initialize application state
    let state = AppState::from_env();

    let addr = state.config.socket_addr();

    if state.has_strategy() {
        info!("Payment provider: mercadopago");
    } else {
        warn!("MP_ACCESS_TOKEN not set; all checkout requests will fail with 500");
    }

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Malibu checkout listening on http://{}", addr);
    info!("Checkout: POST http://{}/create-preference", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
