//! Payment processor trait and wire types
//!
//! All amounts on this boundary are integer minor units; conversion from
//! decimal happens before a request is built.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::types::PaymentMethod;
use thiserror::Error;

/// Provider failure taxonomy.
///
/// `Rejected` means the provider answered and refused; `Unreachable`
/// means no usable answer (network error or timeout).
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider rejected: {0}")]
    Rejected(String),

    #[error("provider unreachable: {0}")]
    Unreachable(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// A created payment intent; the client secret goes back to the browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCustomer {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderAddress {
    pub zip_code: String,
    pub street: String,
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderLineItem {
    pub id: i64,
    pub description: String,
    pub quantity: i32,
    /// Unit amount in minor units
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub holder_name: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub cvv: String,
}

/// Remote order creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOrderRequest {
    pub customer: ProviderCustomer,
    pub address: ProviderAddress,
    pub items: Vec<ProviderLineItem>,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
    /// Validity window in seconds for instant-transfer payment codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    /// Delivery fee in minor units
    pub shipping_fee: i64,
    /// Grand total in minor units
    pub total_amount: i64,
}

/// Remote order creation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOrderResponse {
    pub order_id: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Provider-side status string ("paid", "pending", ...)
    pub status: String,
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub qr_code_expires_at: Option<String>,
}

/// Seam to the external payment vendor.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Create a payment intent for client-side confirmation.
    async fn create_intent(&self, amount_minor: i64, currency: &str)
        -> ProviderResult<PaymentIntent>;

    /// Create an order on the provider side and charge it.
    async fn create_order(
        &self,
        request: &ProviderOrderRequest,
    ) -> ProviderResult<ProviderOrderResponse>;
}
