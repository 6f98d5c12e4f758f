//! Offer Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Promotional offer on a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub discount_percentage: i32,
    pub product_id: i64,
    pub establishment_id: i64,
    pub is_active: bool,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Create offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCreate {
    pub title: String,
    pub description: String,
    pub discount_percentage: i32,
    pub product_id: i64,
    pub establishment_id: i64,
    pub valid_until: Option<DateTime<Utc>>,
}
