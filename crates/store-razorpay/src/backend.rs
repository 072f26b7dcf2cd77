//! # Store Backend Client
//!
//! HTTP implementation of [`OrderBackend`] for the two endpoints the
//! storefront calls. `reqwest` goes through `fetch` when built for wasm32.

use crate::config::RazorpayConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store_core::{
    CreateOrderRequest, OrderBackend, OrderToken, PaymentConfirmation, StoreError, StoreResult,
    VerificationResponse,
};
use tracing::{debug, error, info, instrument};

pub const CREATE_ORDER_PATH: &str = "/create-order";
pub const VERIFY_PAYMENT_PATH: &str = "/verify-payment";

/// Client for the store backend
#[derive(Debug, Clone)]
pub struct HttpOrderBackend {
    client: Client,
    base_url: String,
}

impl HttpOrderBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &RazorpayConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<T, R>(&self, path: &str, body: &T) -> StoreResult<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Store backend error: path={}, status={}, body={}", path, status, text);

            let message = serde_json::from_str::<BackendErrorResponse>(&text)
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("HTTP {}: {}", status, text));

            return Err(StoreError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            StoreError::Serialization(format!("Failed to parse {} response: {}", path, e))
        })
    }
}

#[async_trait(?Send)]
impl OrderBackend for HttpOrderBackend {
    #[instrument(skip(self))]
    async fn create_order(&self, amount: u64) -> StoreResult<OrderToken> {
        debug!("Creating order");

        let order: OrderToken = self
            .post_json(CREATE_ORDER_PATH, &CreateOrderRequest { amount })
            .await?;

        info!("Created order: id={}, amount={}", order.id, order.amount);
        Ok(order)
    }

    #[instrument(skip(self, confirmation), fields(order_id = %confirmation.order_id))]
    async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> StoreResult<bool> {
        let response: VerificationResponse =
            self.post_json(VERIFY_PAYMENT_PATH, confirmation).await?;

        debug!("Verification answered: verified={}", response.verified);
        Ok(response.verified)
    }
}

#[derive(Debug, Deserialize)]
struct BackendErrorResponse {
    #[serde(alias = "message")]
    error: String,
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn confirmation() -> PaymentConfirmation {
        PaymentConfirmation {
            order_id: "order_1".into(),
            payment_id: "pay_1".into(),
            signature: "sig_1".into(),
        }
    }

    #[tokio::test]
    async fn test_create_order_sends_amount() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create-order"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "amount": 999 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "order_1",
                "amount": 99900,
                "currency": "INR",
                "status": "created"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let backend = HttpOrderBackend::new(server.uri());
        let order = backend.create_order(999).await.unwrap();

        assert_eq!(order.id, "order_1");
        assert_eq!(order.amount, 99900);
    }

    #[tokio::test]
    async fn test_create_order_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create-order"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "amount": 99900 })))
            .mount(&server)
            .await;

        let backend = HttpOrderBackend::new(server.uri());
        let err = backend.create_order(999).await.unwrap_err();

        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_create_order_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create-order"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": "Razorpay unavailable" })),
            )
            .mount(&server)
            .await;

        let backend = HttpOrderBackend::new(server.uri());
        let err = backend.create_order(999).await.unwrap_err();

        match err {
            StoreError::Backend { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Razorpay unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_verify_payment_forwards_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/verify-payment"))
            .and(body_json(json!({
                "razorpay_order_id": "order_1",
                "razorpay_payment_id": "pay_1",
                "razorpay_signature": "sig_1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "verified": true })))
            .expect(1)
            .mount(&server)
            .await;

        let backend = HttpOrderBackend::new(format!("{}/", server.uri()));
        assert!(backend.verify_payment(&confirmation()).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_payment_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/verify-payment"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "verified": false })))
            .mount(&server)
            .await;

        let backend = HttpOrderBackend::new(server.uri());
        assert!(!backend.verify_payment(&confirmation()).await.unwrap());
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let backend = HttpOrderBackend::new("http://127.0.0.1:1");
        let err = backend.create_order(999).await.unwrap_err();

        assert!(matches!(err, StoreError::Network(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_from_config() {
        let config = RazorpayConfig::default().with_api_base_url("https://api.example.com/");
        let backend = HttpOrderBackend::from_config(&config);
        assert_eq!(backend.base_url(), "https://api.example.com");
        assert_eq!(
            backend.endpoint(CREATE_ORDER_PATH),
            "https://api.example.com/create-order"
        );
    }
}
