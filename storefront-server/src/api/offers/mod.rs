//! Offer API module

pub mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/establishments/{id}/offers",
            get(handler::list_by_establishment),
        )
        .route(
            "/api/establishments/{id}/active-offers",
            get(handler::list_active),
        )
        .route("/api/offers", post(handler::create))
}
