//! Payment intent API module

pub mod handler;

use axum::{routing::post, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/create-payment-intent", post(handler::create_intent))
}
