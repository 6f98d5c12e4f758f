//! Payment provider API module
//!
//! Remote order creation (provider charges before anything is persisted)
//! and the asynchronous webhook callback.

pub mod handler;

use axum::{routing::post, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/payment-provider/create-order",
            post(handler::create_order),
        )
        .route("/api/payment-provider/webhook", post(handler::webhook))
}
