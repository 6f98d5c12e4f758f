//! Shared types for the storefront platform
//!
//! Domain models, canonical status enums and money helpers used by both
//! the server and the client-side cart.

pub mod models;
pub mod money;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use types::{OrderStatus, PaymentMethod, PaymentStatus};
