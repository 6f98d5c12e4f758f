//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`establishments`] - establishment listing
//! - [`categories`] - category listings per establishment
//! - [`products`] - catalog listings, search, admin CRUD
//! - [`offers`] - promotional offers
//! - [`orders`] - order creation and status updates
//! - [`payments`] - payment intent creation
//! - [`provider`] - remote payment orders and webhooks
//! - [`admin`] - admin login and dashboard stats

pub mod admin;
pub mod categories;
pub mod establishments;
pub mod health;
pub mod offers;
pub mod orders;
pub mod payments;
pub mod products;
pub mod provider;

use axum::Router;

use crate::core::ServerState;

/// Full API router.
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(establishments::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(offers::router())
        .merge(orders::router())
        .merge(payments::router())
        .merge(provider::router())
        .merge(admin::router())
}
