//! HTTP payment processor
//!
//! Talks to the payment vendor's REST API with a bounded request timeout.
//! Timeouts and connection failures map to `Unreachable`; any non-2xx
//! answer maps to `Rejected` carrying the response body.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use super::processor::{
    PaymentIntent, PaymentProcessor, ProviderError, ProviderOrderRequest, ProviderOrderResponse,
    ProviderResult,
};

pub struct HttpPaymentProcessor {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct IntentRequest<'a> {
    amount: i64,
    currency: &'a str,
}

impl HttpPaymentProcessor {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("failed to build http client: {e}"))?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    async fn post<B: Serialize, R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ProviderResult<R> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "provider request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "no response body".to_string());
            warn!(%status, %detail, "provider rejected request");
            return Err(ProviderError::Rejected(detail));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::Unreachable(format!("malformed provider response: {e}")))
    }
}

#[async_trait]
impl PaymentProcessor for HttpPaymentProcessor {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> ProviderResult<PaymentIntent> {
        self.post("/v1/payment_intents", &IntentRequest {
            amount: amount_minor,
            currency,
        })
        .await
    }

    async fn create_order(
        &self,
        request: &ProviderOrderRequest,
    ) -> ProviderResult<ProviderOrderResponse> {
        self.post("/v1/orders", request).await
    }
}
