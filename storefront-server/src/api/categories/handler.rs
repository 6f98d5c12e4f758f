//! Category API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::{Category, CategoryWithProducts};

use crate::core::ServerState;
use crate::db::repository::CategoryRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/establishments/{id}/categories
pub async fn list_by_establishment(
    State(state): State<ServerState>,
    Path(establishment_id): Path<i64>,
) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.db.pool.clone());
    Ok(Json(repo.find_by_establishment(establishment_id).await?))
}

/// GET /api/establishments/{id}/categories-with-products
pub async fn list_with_products(
    State(state): State<ServerState>,
    Path(establishment_id): Path<i64>,
) -> AppResult<Json<Vec<CategoryWithProducts>>> {
    let repo = CategoryRepository::new(state.db.pool.clone());
    Ok(Json(repo.find_with_products(establishment_id).await?))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.db.pool.clone());
    let category = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("category {id} not found")))?;
    Ok(Json(category))
}
