//! # relay-api
//!
//! HTTP API layer for intent-relay-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for creating and updating payment intents
//! - Webhook handler for payment events
//! - Static file serving for the checkout client
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/config` | Publishable key for the checkout client |
//! | POST | `/create-payment-intent` | Create a payment intent |
//! | POST | `/update-payment-intent` | Update an intent's amount |
//! | POST | `/webhook` | Stripe webhook |
//! | GET | `/*` | Static checkout assets |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
