//! Cart action algebra

use serde::{Deserialize, Serialize};
use shared::models::ProductSnapshot;

/// Closed set of cart transitions.
///
/// One variant per action, each carrying exactly its required fields, so
/// a missing handler is a compile error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CartAction {
    SetCurrentEstablishment {
        establishment_id: i64,
    },
    AddItem {
        product: ProductSnapshot,
        establishment_id: i64,
    },
    RemoveItem {
        product_id: i64,
        establishment_id: i64,
    },
    UpdateQuantity {
        product_id: i64,
        quantity: i32,
        establishment_id: i64,
    },
    /// Clear one establishment's cart, or all carts when `None`.
    ClearCart {
        establishment_id: Option<i64>,
    },
    ToggleVisible,
    OpenCart,
    CloseCart,
}
