//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;
use crate::types::{OrderStatus, PaymentMethod, PaymentStatus};

/// Delivery address, stored as a JSON document on the order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub zip_code: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: Option<String>,
}

/// Order entity
///
/// Created once; only `payment_status`, the external payment references and
/// `order_status` change afterwards. Orders are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub delivery_address: DeliveryAddress,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub total_amount: Decimal,
    pub delivery_fee: Decimal,
    pub establishment_id: i64,
    /// Vendor-side transaction/charge reference
    pub external_transaction_ref: Option<String>,
    /// Vendor-side order reference
    pub external_order_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Order creation payload (everything but the generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub delivery_address: DeliveryAddress,
    pub payment_method: PaymentMethod,
    pub total_amount: Decimal,
    pub delivery_fee: Option<Decimal>,
    pub establishment_id: i64,
}

/// Order item entity; immutable after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    /// Unit price captured at order time
    pub price: Decimal,
}

/// Line item in an order creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub product_id: i64,
    pub quantity: i32,
    pub price: Decimal,
}

/// Order item with its product embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemWithProduct {
    #[serde(flatten)]
    pub item: OrderItem,
    pub product: Product,
}

/// Order with its items embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub order_items: Vec<OrderItemWithProduct>,
}
