//! Cart store
//!
//! Owns the state, dispatches actions through the pure reducer and
//! persists the carts map after every mutation.

use tracing::warn;

use super::reducer::reduce;
use super::storage::{CartStorage, StorageError};
use super::{CartAction, CartState, EstablishmentCart};

pub struct CartStore {
    state: CartState,
    storage: Box<dyn CartStorage>,
}

impl CartStore {
    /// Create a store and rehydrate it from the storage adapter.
    ///
    /// A missing or corrupt snapshot means "start empty" and is never an
    /// error.
    pub fn new(storage: Box<dyn CartStorage>) -> Self {
        let mut store = Self {
            state: CartState::default(),
            storage,
        };
        store.hydrate();
        store
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Cart for the currently selected establishment.
    pub fn current_cart(&self) -> EstablishmentCart {
        self.state.current_cart()
    }

    /// Apply one action and persist the resulting carts map.
    pub fn dispatch(&mut self, action: CartAction) {
        self.state = reduce(std::mem::take(&mut self.state), action);
        if let Err(e) = self.storage.save(&self.state.carts) {
            warn!(error = %e, "failed to persist carts");
        }
    }

    /// Replay persisted line items through the reducer.
    ///
    /// Each persisted item becomes an `AddItem` (which re-snapshots the
    /// product into a fresh cart) followed by an `UpdateQuantity` when the
    /// stored quantity exceeds 1.
    fn hydrate(&mut self) {
        let persisted = match self.storage.load() {
            Ok(Some(carts)) => carts,
            Ok(None) => return,
            Err(StorageError::Corrupt(msg)) => {
                warn!(error = %msg, "persisted carts unreadable, starting empty");
                return;
            }
            Err(e) => {
                warn!(error = %e, "cart storage unavailable, starting empty");
                return;
            }
        };

        let mut state = CartState::default();
        for (establishment_id, cart) in persisted {
            for item in cart.items {
                state = reduce(
                    state,
                    CartAction::AddItem {
                        product: item.product.clone(),
                        establishment_id,
                    },
                );
                if item.quantity > 1 {
                    state = reduce(
                        state,
                        CartAction::UpdateQuantity {
                            product_id: item.product.id,
                            quantity: item.quantity,
                            establishment_id,
                        },
                    );
                }
            }
        }
        self.state = state;
    }
}
