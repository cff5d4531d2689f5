//! # Request Handlers
//!
//! Axum request handlers for the payment-intent relay.
//! Bodies are read as raw bytes and decoded by hand so a malformed payload
//! produces our own 400 instead of the framework's default rejection, and
//! error bodies always carry the `{"error": {"message": ...}}` envelope the
//! checkout client expects.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use relay_core::{
    extract_intent_id, CreateIntentParams, EventKind, ProcessorError, UpdateIntentParams,
};
use relay_stripe::webhook::construct_event;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create payment intent request
///
/// Every field defaults on decode: a missing `amount` is 0 and trips the
/// amount validation rather than the parse validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub payment_method_type: String,
    #[serde(default)]
    pub amount: i64,
}

/// Update payment intent request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentIntentRequest {
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub amount: i64,
}

/// Publishable-key handout for the checkout client
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub publishable_key: String,
}

/// Client-secret reply for created and updated intents
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSecretResponse {
    pub client_secret: String,
}

/// Error response envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorMessage,
}

/// Message inside the error envelope
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// Classify a processor failure into status + body.
///
/// An API error is the processor telling the cardholder something
/// ("Your card was declined.") and goes out verbatim as a 400; every
/// other failure is ours and is masked behind a generic 500.
fn processor_error_response(err: ProcessorError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ProcessorError::Api { message, .. } => {
            error!("Stripe error: {}", message);
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
        }
        other => {
            error!("Server error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Unknown server error")),
            )
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Hand out the publishable key the checkout client boots with
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        publishable_key: state.publishable_key.clone(),
    })
}

/// Create a payment intent and reply with its client secret
#[instrument(skip(state, body))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ClientSecretResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request: CreatePaymentIntentRequest = serde_json::from_slice(&body).map_err(|e| {
        info!("Rejected create request: {}", e);
        bad_request("Invalid request payload")
    })?;

    if request.amount <= 0 {
        info!("Rejected create request: amount={}", request.amount);
        return Err(bad_request("Invalid amount"));
    }

    let params = CreateIntentParams::new(
        request.amount,
        request.currency,
        &request.payment_method_type,
    );

    info!(
        "Creating payment intent: amount={}, methods={:?}",
        params.amount, params.payment_method_types
    );

    let intent = state
        .processor
        .create_payment_intent(&params)
        .await
        .map_err(processor_error_response)?;

    Ok(Json(ClientSecretResponse {
        client_secret: intent.client_secret,
    }))
}

/// Update the amount on an existing payment intent
///
/// The intent id is recovered from the client secret the checkout client
/// already holds, so callers never handle raw intent ids.
#[instrument(skip(state, body))]
pub async fn update_payment_intent(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ClientSecretResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request: UpdatePaymentIntentRequest = serde_json::from_slice(&body).map_err(|e| {
        info!("Rejected update request: {}", e);
        bad_request("Invalid request payload")
    })?;

    if request.amount <= 0 {
        info!("Rejected update request: amount={}", request.amount);
        return Err(bad_request("Invalid amount"));
    }

    let intent_id = extract_intent_id(&request.client_secret).ok_or_else(|| {
        info!("Rejected update request: no intent id in client secret");
        bad_request("Invalid clientSecret")
    })?;

    info!(
        "Updating payment intent: id={}, amount={}",
        intent_id, request.amount
    );

    let intent = state
        .processor
        .update_payment_intent(intent_id, &UpdateIntentParams::new(request.amount))
        .await
        .map_err(processor_error_response)?;

    Ok(Json(ClientSecretResponse {
        client_secret: intent.client_secret,
    }))
}

/// Receive and acknowledge a processor webhook
///
/// Verification failures are the sender's problem (400 with the reason);
/// everything that verifies is acknowledged with `null` so the processor
/// stops redelivering, whether or not we care about the event type.
#[instrument(skip(state, headers, body))]
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    let signature = headers
        .get("Stripe-Signature")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let event = construct_event(&body, signature, &state.webhook_secret).map_err(|e| {
        warn!("Webhook verification failed: {}", e);
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string())))
    })?;

    match event.kind() {
        EventKind::PaymentSucceeded => info!("Payment completed!"),
        EventKind::PaymentFailed => warn!("Payment failed: id={}", event.id),
        EventKind::Other => debug!("Unhandled webhook event: type={}", event.event_type),
    }

    Ok(Json(Value::Null))
}
