//! Establishment Model

use serde::{Deserialize, Serialize};

/// Establishment entity (supermarket, butcher, bakery, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Establishment {
    pub id: i64,
    pub name: String,
    /// Establishment kind: 'supermarket', 'butcher', 'bakery'
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub icon: String,
    pub is_active: bool,
}

/// Create establishment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub icon: String,
}
