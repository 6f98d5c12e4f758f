//! Establishment API module

pub mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/establishments", get(handler::list))
        .route("/api/establishments/{id}", get(handler::get_by_id))
}
