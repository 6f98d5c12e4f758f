//! Category Model

use serde::{Deserialize, Serialize};

use super::Product;

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub establishment_id: i64,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub establishment_id: i64,
}

/// Category with its products embedded (catalog listing)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    pub products: Vec<Product>,
}
