//! # Routes
//!
//! Axum router configuration for the payment-intent relay.
//! The four API routes are registered explicitly; everything else falls
//! through to the static checkout assets.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the main application router
///
/// Routes:
/// - GET  /config                - Publishable key for the checkout client
/// - POST /create-payment-intent - Create an intent, reply with its client secret
/// - POST /update-payment-intent - Change the amount on an existing intent
/// - POST /webhook               - Verified processor notifications
/// - GET  /*                     - Static checkout assets (index.html, js, css)
///
/// Wrong methods on registered paths get a 405 from the method router;
/// unknown paths go to the static fallback, which 404s when the file is
/// missing.
pub fn create_router(state: AppState) -> Router {
    let static_assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/config", get(handlers::get_config))
        .route("/create-payment-intent", post(handlers::create_payment_intent))
        .route("/update-payment-intent", post(handlers::update_payment_intent))
        .route("/webhook", post(handlers::webhook))
        .fallback_service(static_assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use relay_core::{
        CreateIntentParams, PaymentIntent, PaymentProcessor, ProcessorError, ProcessorResult,
        UpdateIntentParams,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    // None of these requests should ever reach the processor.
    struct UnreachableProcessor;

    #[async_trait]
    impl PaymentProcessor for UnreachableProcessor {
        async fn create_payment_intent(
            &self,
            _params: &CreateIntentParams,
        ) -> ProcessorResult<PaymentIntent> {
            Err(ProcessorError::Network("not wired in this test".to_string()))
        }

        async fn update_payment_intent(
            &self,
            _intent_id: &str,
            _params: &UpdateIntentParams,
        ) -> ProcessorResult<PaymentIntent> {
            Err(ProcessorError::Network("not wired in this test".to_string()))
        }

        fn processor_name(&self) -> &'static str {
            "unreachable"
        }
    }

    fn app_with_static_dir(static_dir: &str) -> Router {
        create_router(AppState {
            processor: Arc::new(UnreachableProcessor),
            publishable_key: "pk_test_abc123".to_string(),
            webhook_secret: "whsec_test_secret".to_string(),
            config: crate::state::AppConfig {
                host: "127.0.0.1".to_string(),
                port: 4242,
                static_dir: static_dir.to_string(),
            },
        })
    }

    async fn request(app: Router, method: &str, path: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_wrong_methods_are_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let (status, body) = request(
            app_with_static_dir(dir.path().to_str().unwrap()),
            "POST",
            "/config",
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(body.is_empty());

        let (status, _) = request(
            app_with_static_dir(dir.path().to_str().unwrap()),
            "GET",
            "/webhook",
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, _) = request(
            app_with_static_dir(dir.path().to_str().unwrap()),
            "GET",
            "/create-payment-intent",
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, _) = request(
            app_with_static_dir(dir.path().to_str().unwrap()),
            "DELETE",
            "/update-payment-intent",
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unmatched_paths_serve_static_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>checkout</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('pay');").unwrap();

        let (status, body) = request(
            app_with_static_dir(dir.path().to_str().unwrap()),
            "GET",
            "/app.js",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log('pay');");

        // Directory requests resolve to index.html.
        let (status, body) = request(
            app_with_static_dir(dir.path().to_str().unwrap()),
            "GET",
            "/",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html>checkout</html>");
    }

    #[tokio::test]
    async fn test_missing_static_asset_is_404() {
        let dir = tempfile::tempdir().unwrap();

        let (status, _) = request(
            app_with_static_dir(dir.path().to_str().unwrap()),
            "GET",
            "/nope.css",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
