//! Client-side shopping cart for the storefront platform
//!
//! One cart per establishment, driven by a pure reducer over a closed
//! action enum, with durable persistence of the carts map after every
//! mutation.

pub mod cart;

// Re-exports
pub use cart::storage::{CartStorage, MemoryCartStorage, RedbCartStorage, StorageError};
pub use cart::{CartAction, CartLineItem, CartState, CartStore, EstablishmentCart};
