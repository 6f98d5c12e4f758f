//! Category API module

pub mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/establishments/{id}/categories",
            get(handler::list_by_establishment),
        )
        .route(
            "/api/establishments/{id}/categories-with-products",
            get(handler::list_with_products),
        )
        .route("/api/categories/{id}", get(handler::get_by_id))
}
