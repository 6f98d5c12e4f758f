//! Pure cart reducer
//!
//! No I/O in here; persistence is the store's job.

use rust_decimal::Decimal;

use super::{CartAction, CartLineItem, CartState, EstablishmentCart};

/// Exact decimal total: `Σ(price × quantity)`.
pub fn calculate_total(items: &[CartLineItem]) -> Decimal {
    items
        .iter()
        .map(|item| item.product.price * Decimal::from(item.quantity))
        .sum()
}

/// Apply one action to the state.
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::SetCurrentEstablishment { establishment_id } => {
            state.current_establishment_id = Some(establishment_id);
            state
        }

        CartAction::AddItem {
            product,
            establishment_id,
        } => {
            let cart = state.carts.entry(establishment_id).or_default();
            match cart.items.iter_mut().find(|i| i.product.id == product.id) {
                Some(existing) => existing.quantity += 1,
                None => cart.items.push(CartLineItem {
                    product,
                    quantity: 1,
                }),
            }
            cart.total = calculate_total(&cart.items);
            state
        }

        CartAction::RemoveItem {
            product_id,
            establishment_id,
        } => {
            let Some(cart) = state.carts.get_mut(&establishment_id) else {
                return state;
            };
            cart.items.retain(|i| i.product.id != product_id);
            cart.total = calculate_total(&cart.items);
            state
        }

        CartAction::UpdateQuantity {
            product_id,
            quantity,
            establishment_id,
        } => {
            // Zero or negative quantity means removal; such line items are
            // never stored.
            if quantity <= 0 {
                return reduce(
                    state,
                    CartAction::RemoveItem {
                        product_id,
                        establishment_id,
                    },
                );
            }
            let Some(cart) = state.carts.get_mut(&establishment_id) else {
                return state;
            };
            if let Some(item) = cart.items.iter_mut().find(|i| i.product.id == product_id) {
                item.quantity = quantity;
            }
            cart.total = calculate_total(&cart.items);
            state
        }

        CartAction::ClearCart { establishment_id } => {
            match establishment_id {
                Some(id) => {
                    state.carts.insert(id, EstablishmentCart::default());
                }
                None => state.carts.clear(),
            }
            state
        }

        CartAction::ToggleVisible => {
            state.is_visible = !state.is_visible;
            state
        }
        CartAction::OpenCart => {
            state.is_visible = true;
            state
        }
        CartAction::CloseCart => {
            state.is_visible = false;
            state
        }
    }
}
