//! # Intent Relay
//!
//! Minimal payment-intent relay between a checkout page and Stripe.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export STRIPE_PUBLISHABLE_KEY=pk_test_...
//! export STRIPE_WEBHOOK_SECRET=whsec_...
//! export STATIC_DIR=public
//!
//! # Run the server
//! intent-relay
//! ```

use relay_api::{routes, state::AppState};
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

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();

    info!("Processor: {}", state.processor.processor_name());
    info!("Static assets: {}", state.config.static_dir);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 Intent-Relay running at http://{}", addr);
    info!("💳 Create intent: POST http://{}/create-payment-intent", addr);
    info!("🔔 Webhook: POST http://{}/webhook", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  ⚡ Intent-Relay RS ⚡
  ━━━━━━━━━━━━━━━━━━━━
  Payment-intent relay backend
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
