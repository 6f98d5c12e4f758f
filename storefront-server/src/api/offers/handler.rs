//! Offer API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::{Offer, OfferCreate};

use crate::core::ServerState;
use crate::db::repository::{OfferRepository, ProductRepository};
use crate::utils::validation::{validate_required_text, MAX_NAME_LEN, MAX_NOTE_LEN};
use crate::utils::{AppError, AppResult};

/// GET /api/establishments/{id}/offers
pub async fn list_by_establishment(
    State(state): State<ServerState>,
    Path(establishment_id): Path<i64>,
) -> AppResult<Json<Vec<Offer>>> {
    let repo = OfferRepository::new(state.db.pool.clone());
    Ok(Json(repo.find_by_establishment(establishment_id).await?))
}

/// GET /api/establishments/{id}/active-offers
pub async fn list_active(
    State(state): State<ServerState>,
    Path(establishment_id): Path<i64>,
) -> AppResult<Json<Vec<Offer>>> {
    let repo = OfferRepository::new(state.db.pool.clone());
    Ok(Json(repo.find_active(establishment_id).await?))
}

/// POST /api/offers
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OfferCreate>,
) -> AppResult<Json<Offer>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;
    if !(1..=100).contains(&payload.discount_percentage) {
        return Err(AppError::validation(
            "discountPercentage must be between 1 and 100",
        ));
    }

    let products = ProductRepository::new(state.db.pool.clone());
    let product = products
        .find_by_id(payload.product_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("product {} not found", payload.product_id)))?;
    if product.establishment_id != payload.establishment_id {
        return Err(AppError::validation(
            "product belongs to a different establishment",
        ));
    }

    let repo = OfferRepository::new(state.db.pool.clone());
    Ok(Json(repo.create(payload).await?))
}
