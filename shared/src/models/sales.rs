//! Product Sales Aggregate Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Denormalized running sales totals per product.
///
/// Maintained transactionally alongside order-item creation; both counters
/// are monotonically non-decreasing and are never rolled back by order
/// cancellation or payment failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub id: i64,
    pub product_id: i64,
    pub establishment_id: i64,
    pub quantity_sold: i64,
    pub total_revenue: Decimal,
    pub last_sale_date: DateTime<Utc>,
}
