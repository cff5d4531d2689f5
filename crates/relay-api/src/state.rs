//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the configured payment processor and the keys handlers hand out.

use relay_core::BoxedPaymentProcessor;
use relay_stripe::{StripeConfig, StripeProcessor};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory the static checkout assets are served from
    pub static_dir: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4242),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Configured payment processor
    pub processor: BoxedPaymentProcessor,
    /// Publishable key handed to the checkout client
    pub publishable_key: String,
    /// Webhook signing secret
    pub webhook_secret: String,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the Stripe processor
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let stripe_config = StripeConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        tracing::info!(
            "Stripe mode: {}",
            if stripe_config.is_test_mode() {
                "test"
            } else {
                "live"
            }
        );

        let publishable_key = stripe_config.publishable_key.clone();
        let webhook_secret = stripe_config.webhook_secret.clone();
        let processor = Arc::new(StripeProcessor::new(stripe_config)) as BoxedPaymentProcessor;

        Ok(Self {
            processor,
            publishable_key,
            webhook_secret,
            config,
        })
    }
}
