//! # Payment Processor Trait
//!
//! The seam between HTTP handlers and the upstream payment processor.
//! Handlers hold a [`BoxedPaymentProcessor`] and never know which
//! concrete backend is wired in, which keeps them testable against an
//! in-memory fake.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ProcessorResult;
use crate::intent::{CreateIntentParams, PaymentIntent, UpdateIntentParams};

/// Abstraction over a payment processor's intent API.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Create a new payment intent.
    async fn create_payment_intent(
        &self,
        params: &CreateIntentParams,
    ) -> ProcessorResult<PaymentIntent>;

    /// Update the amount on an existing payment intent.
    async fn update_payment_intent(
        &self,
        intent_id: &str,
        params: &UpdateIntentParams,
    ) -> ProcessorResult<PaymentIntent>;

    /// Short name for logging ("stripe", "mock", ...)
    fn processor_name(&self) -> &'static str;
}

/// Shared, object-safe handle to the configured processor.
pub type BoxedPaymentProcessor = Arc<dyn PaymentProcessor>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessorError;

    struct StubProcessor;

    #[async_trait]
    impl PaymentProcessor for StubProcessor {
        async fn create_payment_intent(
            &self,
            params: &CreateIntentParams,
        ) -> ProcessorResult<PaymentIntent> {
            Ok(PaymentIntent {
                id: "pi_stub".to_string(),
                client_secret: "pi_stub_secret_abc".to_string(),
                amount: params.amount,
                currency: params.currency.clone(),
                status: "requires_payment_method".to_string(),
            })
        }

        async fn update_payment_intent(
            &self,
            intent_id: &str,
            _params: &UpdateIntentParams,
        ) -> ProcessorResult<PaymentIntent> {
            Err(ProcessorError::api(format!("No such payment_intent: '{intent_id}'")))
        }

        fn processor_name(&self) -> &'static str {
            "stub"
        }
    }

    #[tokio::test]
    async fn test_boxed_processor_dispatch() {
        let processor: BoxedPaymentProcessor = Arc::new(StubProcessor);
        assert_eq!(processor.processor_name(), "stub");

        let params = CreateIntentParams::new(1099, "usd", "card");
        let intent = processor
            .create_payment_intent(&params)
            .await
            .expect("stub create should succeed");
        assert_eq!(intent.amount, 1099);
        assert_eq!(intent.currency, "usd");
    }
}
