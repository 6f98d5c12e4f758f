//! Product Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Unit price in major units, 2 decimal places
    pub price: Decimal,
    /// Pre-discount price, when the product is on offer
    pub original_price: Option<Decimal>,
    /// Sale unit: 'kg', 'unit', 'liter', ...
    pub unit: String,
    pub stock: i64,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub category_id: i64,
    pub establishment_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub unit: String,
    pub stock: Option<i64>,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
    pub category_id: i64,
    pub establishment_id: i64,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub original_price: Option<Decimal>,
    pub unit: Option<String>,
    pub stock: Option<i64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub category_id: Option<i64>,
}

/// Product with its category embedded (catalog responses)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub category: Category,
}

/// Immutable copy of catalog data captured when an item enters a cart.
///
/// Catalog price changes after the capture do not affect items already in
/// the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub unit: String,
    pub establishment_id: i64,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            unit: product.unit.clone(),
            establishment_id: product.establishment_id,
        }
    }
}
