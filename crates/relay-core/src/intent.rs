//! # Payment Intent Types
//!
//! Request parameters and the minimal intent projection used by the relay.
//! The fixed method-type pairing and ACSS debit mandate defaults live here
//! so they are visible (and testable) at the processor-call boundary
//! rather than buried in an HTTP handler.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimal projection of the processor's payment-intent object.
///
/// Only the fields the relay actually reads are modeled; everything else
/// in the processor's response is ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Intent identifier (`pi_...`)
    pub id: String,

    /// Opaque token handed to client-side code to complete payment.
    /// Empty when the processor omits it (mirrors a missing field rather
    /// than failing the decode).
    #[serde(default)]
    pub client_secret: String,

    /// Amount in minor currency units
    #[serde(default)]
    pub amount: i64,

    /// ISO 4217 currency code, lowercase
    #[serde(default)]
    pub currency: String,

    /// Lifecycle status as reported by the processor
    #[serde(default)]
    pub status: String,
}

/// Fixed mandate options attached when the payment method is ACSS debit.
///
/// The values are not configurable: pre-authorized debits collected
/// through this relay are always sporadic personal transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcssDebitMandateOptions {
    pub payment_schedule: String,
    pub transaction_type: String,
}

impl AcssDebitMandateOptions {
    /// The one mandate shape this relay ever sends.
    pub fn sporadic_personal() -> Self {
        Self {
            payment_schedule: "sporadic".to_string(),
            transaction_type: "personal".to_string(),
        }
    }
}

/// Parameters for creating a payment intent.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIntentParams {
    /// Amount in minor currency units, already validated > 0
    pub amount: i64,

    /// ISO 4217 currency code, passed to the processor verbatim
    pub currency: String,

    /// Payment method types, in the order they are sent
    pub payment_method_types: Vec<String>,

    /// Mandate options, present only for ACSS debit
    pub mandate_options: Option<AcssDebitMandateOptions>,
}

impl CreateIntentParams {
    /// Build create parameters from a requested method type, applying the
    /// fixed special cases:
    ///
    /// - `"link"` always rides together with `"card"`, in that order;
    /// - `"acss_debit"` attaches the sporadic/personal mandate options;
    /// - anything else is forwarded verbatim as a single-element list.
    pub fn new(amount: i64, currency: impl Into<String>, method_type: &str) -> Self {
        Self {
            amount,
            currency: currency.into(),
            payment_method_types: expand_method_type(method_type),
            mandate_options: (method_type == "acss_debit")
                .then(AcssDebitMandateOptions::sporadic_personal),
        }
    }
}

/// Parameters for updating an existing payment intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateIntentParams {
    /// New amount in minor currency units, already validated > 0
    pub amount: i64,
}

impl UpdateIntentParams {
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }
}

/// Expand a requested payment method type into the outgoing list.
fn expand_method_type(method_type: &str) -> Vec<String> {
    if method_type == "link" {
        // Link requires card as a companion method.
        vec!["link".to_string(), "card".to_string()]
    } else {
        vec![method_type.to_string()]
    }
}

static INTENT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"pi_[A-Za-z0-9]+").expect("intent id pattern is valid"));

/// Extract the payment-intent identifier embedded in a client secret.
///
/// Client secrets look like `pi_3OzqPD2eZvKYlo2C1_secret_hK9...`; the
/// leading `pi_<alphanumeric>` run is the intent id. Returns the first
/// match, or `None` when the token carries no identifier.
pub fn extract_intent_id(client_secret: &str) -> Option<&str> {
    INTENT_ID.find(client_secret).map(|m| m.as_str())
}
