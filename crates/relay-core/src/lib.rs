//! # relay-core
//!
//! Core types and traits for the intent-relay payment backend.
//!
//! This crate provides:
//! - `PaymentProcessor` trait for implementing processor backends
//! - `CreateIntentParams` and `UpdateIntentParams` for intent calls
//! - `PaymentIntent` as the minimal intent projection handlers need
//! - `Event` and `EventKind` for decoded webhook deliveries
//! - `ProcessorError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use relay_core::{CreateIntentParams, PaymentProcessor};
//!
//! // Build parameters; "link" expands to ["link", "card"] and
//! // "acss_debit" picks up its mandate options automatically.
//! let params = CreateIntentParams::new(1099, "usd", "link");
//!
//! // Relay through whichever processor is wired in
//! let intent = processor.create_payment_intent(&params).await?;
//!
//! // Hand intent.client_secret to client-side code
//! ```

pub mod error;
pub mod event;
pub mod intent;
pub mod processor;

// Re-exports for convenience
pub use error::{ProcessorError, ProcessorResult};
pub use event::{Event, EventData, EventKind};
pub use intent::{
    extract_intent_id, AcssDebitMandateOptions, CreateIntentParams, PaymentIntent,
    UpdateIntentParams,
};
pub use processor::{BoxedPaymentProcessor, PaymentProcessor};
