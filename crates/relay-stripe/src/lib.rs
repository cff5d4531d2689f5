//! # relay-stripe
//!
//! Stripe payment-intent backend for intent-relay-rs.
//!
//! This crate provides:
//!
//! 1. **StripeProcessor** - `PaymentProcessor` over the Payment Intents API
//!    - Form-encoded create/update calls
//!    - Error-envelope decoding so card declines surface verbatim
//! 2. **construct_event** - webhook signature verification
//!    - HMAC-SHA256 over `timestamp.payload`
//!    - Replay-window and constant-time checks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relay_stripe::StripeProcessor;
//! use relay_core::{CreateIntentParams, PaymentProcessor};
//!
//! // Create processor from environment
//! let processor = StripeProcessor::from_env()?;
//!
//! // Create a payment intent
//! let intent = processor
//!     .create_payment_intent(&CreateIntentParams::new(1099, "usd", "card"))
//!     .await?;
//!
//! // Hand intent.client_secret to the browser
//! ```
//!
//! ## Webhook Handling
//!
//! ```rust,ignore
//! use relay_stripe::webhook::construct_event;
//!
//! // In your webhook endpoint:
//! let event = construct_event(&body, signature_header, &webhook_secret)?;
//! if event.kind() == EventKind::PaymentSucceeded {
//!     println!("Payment completed!");
//! }
//! ```

pub mod config;
pub mod intents;
pub mod webhook;

// Re-exports
pub use config::StripeConfig;
pub use intents::StripeProcessor;
pub use webhook::{construct_event, WebhookError, SIGNATURE_TOLERANCE_SECS};
