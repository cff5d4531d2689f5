//! # Stripe Payment Intents
//!
//! `PaymentProcessor` implementation over Stripe's Payment Intents API.
//! Calls are form-encoded the way Stripe expects (bracketed keys for
//! nested fields) and responses decode into the minimal intent projection
//! from `relay-core`.

use crate::config::StripeConfig;
use async_trait::async_trait;
use relay_core::{
    CreateIntentParams, PaymentIntent, PaymentProcessor, ProcessorError, ProcessorResult,
    UpdateIntentParams,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Identifies the relay to Stripe on every outbound call
const USER_AGENT: &str = concat!("intent-relay-rs/", env!("CARGO_PKG_VERSION"));

/// Stripe-backed payment processor
///
/// Talks straight to the Payment Intents endpoints over HTTPS. No
/// generated client; the relay only ever makes the two calls below.
pub struct StripeProcessor {
    config: StripeConfig,
    client: Client,
}

impl StripeProcessor {
    /// Create a new Stripe processor
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> ProcessorResult<Self> {
        let config = StripeConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Build the form body for an intent-creation call
    fn build_create_form(&self, params: &CreateIntentParams) -> Vec<(String, String)> {
        let mut form: Vec<(String, String)> = vec![
            ("amount".to_string(), params.amount.to_string()),
            ("currency".to_string(), params.currency.clone()),
        ];

        for (i, method) in params.payment_method_types.iter().enumerate() {
            form.push((format!("payment_method_types[{}]", i), method.clone()));
        }

        if let Some(ref mandate) = params.mandate_options {
            form.push((
                "payment_method_options[acss_debit][mandate_options][payment_schedule]"
                    .to_string(),
                mandate.payment_schedule.clone(),
            ));
            form.push((
                "payment_method_options[acss_debit][mandate_options][transaction_type]"
                    .to_string(),
                mandate.transaction_type.clone(),
            ));
        }

        form
    }

    /// POST a form to a Stripe endpoint and decode the intent reply
    async fn post_form(
        &self,
        url: &str,
        form: &[(String, String)],
    ) -> ProcessorResult<PaymentIntent> {
        let response = self
            .client
            .post(url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(form)
            .send()
            .await
            .map_err(|e| ProcessorError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProcessorError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            // Stripe's error envelope; its message is meant for the caller
            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(ProcessorError::Api {
                    message: error_response.error.message,
                    code: error_response.error.code,
                });
            }

            return Err(ProcessorError::InvalidResponse(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            ProcessorError::InvalidResponse(format!("Failed to parse intent response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    #[instrument(skip(self, params), fields(amount = params.amount))]
    async fn create_payment_intent(
        &self,
        params: &CreateIntentParams,
    ) -> ProcessorResult<PaymentIntent> {
        debug!(
            "Creating payment intent: currency={}, methods={:?}",
            params.currency, params.payment_method_types
        );

        let url = format!("{}/v1/payment_intents", self.config.api_base_url);
        let form = self.build_create_form(params);

        let intent = self.post_form(&url, &form).await?;

        info!(
            "Created payment intent: id={}, status={}",
            intent.id, intent.status
        );

        Ok(intent)
    }

    #[instrument(skip(self, params), fields(amount = params.amount))]
    async fn update_payment_intent(
        &self,
        intent_id: &str,
        params: &UpdateIntentParams,
    ) -> ProcessorResult<PaymentIntent> {
        let url = format!(
            "{}/v1/payment_intents/{}",
            self.config.api_base_url, intent_id
        );
        let form = vec![("amount".to_string(), params.amount.to_string())];

        let intent = self.post_form(&url, &form).await?;

        info!(
            "Updated payment intent: id={}, amount={}",
            intent.id, intent.amount
        );

        Ok(intent)
    }

    fn processor_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
    #[serde(default)]
    code: Option<String>,
}
