//! Product API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::models::{Product, ProductCreate, ProductUpdate, ProductWithCategory};

use crate::core::ServerState;
use crate::db::repository::{CategoryRepository, ProductRepository, ProductSort};
use crate::utils::validation::{
    validate_optional_text, validate_required_text, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN,
    MAX_URL_LEN,
};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    sort_by: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    q: String,
}

/// GET /api/establishments/{id}/products?sortBy=...
pub async fn list_by_establishment(
    State(state): State<ServerState>,
    Path(establishment_id): Path<i64>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Product>>> {
    let sort = ProductSort::from_param(params.sort_by.as_deref());
    let repo = ProductRepository::new(state.db.pool.clone());
    Ok(Json(repo.find_by_establishment(establishment_id, sort).await?))
}

/// GET /api/establishments/{id}/featured-products
pub async fn list_featured(
    State(state): State<ServerState>,
    Path(establishment_id): Path<i64>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.pool.clone());
    Ok(Json(repo.find_featured(establishment_id).await?))
}

/// GET /api/categories/{id}/products
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category_id): Path<i64>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.pool.clone());
    Ok(Json(repo.find_by_category(category_id).await?))
}

/// GET /api/products/{id} - product with its category embedded
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductWithCategory>> {
    let repo = ProductRepository::new(state.db.pool.clone());
    let product = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("product {id} not found")))?;

    let categories = CategoryRepository::new(state.db.pool.clone());
    let category = categories
        .find_by_id(product.category_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("category {} not found", product.category_id))
        })?;

    Ok(Json(ProductWithCategory { product, category }))
}

/// GET /api/establishments/{id}/search?q=...
pub async fn search_establishment(
    State(state): State<ServerState>,
    Path(establishment_id): Path<i64>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.pool.clone());
    Ok(Json(repo.search(Some(establishment_id), &params.q).await?))
}

/// GET /api/search?q=... - whole catalog
pub async fn search_all(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.pool.clone());
    Ok(Json(repo.search(None, &params.q).await?))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_required_text(&payload.unit, "unit", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;
    if payload.price <= rust_decimal::Decimal::ZERO {
        return Err(AppError::validation("price must be positive"));
    }

    let categories = CategoryRepository::new(state.db.pool.clone());
    let category = categories
        .find_by_id(payload.category_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("category {} not found", payload.category_id))
        })?;
    if category.establishment_id != payload.establishment_id {
        return Err(AppError::validation(
            "category belongs to a different establishment",
        ));
    }

    let repo = ProductRepository::new(state.db.pool.clone());
    Ok(Json(repo.create(payload).await?))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.unit, "unit", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;
    if let Some(price) = payload.price
        && price <= rust_decimal::Decimal::ZERO
    {
        return Err(AppError::validation("price must be positive"));
    }

    let repo = ProductRepository::new(state.db.pool.clone());
    Ok(Json(repo.update(id, payload).await?))
}
