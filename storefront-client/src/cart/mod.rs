//! Cart state machine
//!
//! State is the tuple `(carts, current_establishment_id, is_visible)`.
//! All mutation goes through [`reducer::reduce`], a pure function of
//! `(state, action)`; [`CartStore`] owns the state and persists the carts
//! map through an explicit [`storage::CartStorage`] adapter after every
//! dispatch.

mod action;
mod reducer;
pub mod storage;
mod store;


use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::ProductSnapshot;

pub use action::CartAction;
pub use reducer::{calculate_total, reduce};
pub use store::CartStore;

/// One line in an establishment's cart.
///
/// `product` is a snapshot captured at add time; `quantity` is always >= 1
/// (zero/negative quantities are expressed as removal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: ProductSnapshot,
    pub quantity: i32,
}

/// A single establishment's cart.
///
/// `total` is a cached pure function of `items`, recomputed on every
/// transition, never mutated independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstablishmentCart {
    pub items: Vec<CartLineItem>,
    pub total: Decimal,
}

/// Persisted shape: establishment id -> cart.
pub type CartsMap = HashMap<i64, EstablishmentCart>;

/// Full cart store state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub carts: CartsMap,
    pub current_establishment_id: Option<i64>,
    pub is_visible: bool,
}

impl CartState {
    /// Cart for the currently selected establishment (empty when none).
    pub fn current_cart(&self) -> EstablishmentCart {
        self.current_establishment_id
            .and_then(|id| self.carts.get(&id).cloned())
            .unwrap_or_default()
    }
}
