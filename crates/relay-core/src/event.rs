//! # Webhook Event Types
//!
//! Decoded shape of processor webhook deliveries. Verification of the
//! signature header lives with the processor client; this module only
//! models the payload once it is trusted.

use serde::Deserialize;
use serde_json::Value;

/// A webhook event delivered by the payment processor.
///
/// All fields default so that an event of an unknown or partial shape
/// still decodes; the relay acknowledges everything it can verify.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: String,

    /// Dotted event name, e.g. `payment_intent.succeeded`
    #[serde(rename = "type", default)]
    pub event_type: String,

    #[serde(default)]
    pub data: EventData,

    /// Unix timestamp the processor created the event
    #[serde(default)]
    pub created: i64,
}

/// Event payload wrapper; `object` holds the affected API resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventData {
    #[serde(default)]
    pub object: Value,
}

/// Coarse classification of the event types the relay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PaymentSucceeded,
    PaymentFailed,
    Other,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self.event_type.as_str() {
            "payment_intent.succeeded" => EventKind::PaymentSucceeded,
            "payment_intent.payment_failed" => EventKind::PaymentFailed,
            _ => EventKind::Other,
        }
    }

    /// Amount on the underlying object, when the payload carries one.
    pub fn object_amount(&self) -> Option<i64> {
        self.data.object.get("amount").and_then(Value::as_i64)
    }
}
