//! Order API module

pub mod handler;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/establishments/{id}/orders",
            get(handler::list_by_establishment),
        )
        .route("/api/orders", post(handler::create))
        .route("/api/orders/{id}", get(handler::get_by_id))
        .route("/api/orders/{id}/status", patch(handler::update_status))
        .route(
            "/api/orders/{id}/payment-success",
            post(handler::payment_success),
        )
}
