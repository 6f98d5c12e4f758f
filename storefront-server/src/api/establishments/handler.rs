//! Establishment API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::Establishment;

use crate::core::ServerState;
use crate::db::repository::EstablishmentRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/establishments - all active establishments
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Establishment>>> {
    let repo = EstablishmentRepository::new(state.db.pool.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/establishments/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Establishment>> {
    let repo = EstablishmentRepository::new(state.db.pool.clone());
    let establishment = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("establishment {id} not found")))?;
    Ok(Json(establishment))
}
