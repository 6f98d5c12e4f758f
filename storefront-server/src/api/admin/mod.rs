//! Admin API module

pub mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/login", post(handler::login))
        .route("/api/admin/forgot-password", post(handler::forgot_password))
        .route("/api/establishments/{id}/stats", get(handler::stats))
}
