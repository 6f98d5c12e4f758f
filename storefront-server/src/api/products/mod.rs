//! Product API module

pub mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/establishments/{id}/products",
            get(handler::list_by_establishment),
        )
        .route(
            "/api/establishments/{id}/featured-products",
            get(handler::list_featured),
        )
        .route(
            "/api/establishments/{id}/search",
            get(handler::search_establishment),
        )
        .route("/api/categories/{id}/products", get(handler::list_by_category))
        .route("/api/products", post(handler::create))
        .route(
            "/api/products/{id}",
            get(handler::get_by_id).put(handler::update),
        )
        .route("/api/search", get(handler::search_all))
}
