//! Order API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use shared::models::{Order, OrderDraft, OrderLineItem, OrderWithItems};
use shared::types::{OrderStatus, PaymentStatus};

use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order: OrderDraft,
    pub items: Vec<OrderLineItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccessRequest {
    pub payment_intent_id: String,
}

/// GET /api/establishments/{id}/orders - newest first, with items
pub async fn list_by_establishment(
    State(state): State<ServerState>,
    Path(establishment_id): Path<i64>,
) -> AppResult<Json<Vec<OrderWithItems>>> {
    let repo = OrderRepository::new(state.db.pool.clone());
    Ok(Json(repo.find_by_establishment(establishment_id).await?))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderWithItems>> {
    let repo = OrderRepository::new(state.db.pool.clone());
    let order = repo
        .find_with_items(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("order {id} not found")))?;
    Ok(Json(order))
}

/// POST /api/orders - create a local order with pending payment
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<OrderWithItems>> {
    let order = state
        .order_service()
        .create_order(payload.order, payload.items)
        .await?;
    Ok(Json(order))
}

/// PATCH /api/orders/{id}/status - returns the updated order
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<Order>> {
    let order = state
        .order_service()
        .update_order_status(id, payload.status)
        .await?;
    Ok(Json(order))
}

/// POST /api/orders/{id}/payment-success
///
/// Client-side confirmation after an intent was confirmed in the browser.
/// Returns the updated order.
pub async fn payment_success(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PaymentSuccessRequest>,
) -> AppResult<Json<Order>> {
    if payload.payment_intent_id.trim().is_empty() {
        return Err(AppError::validation("paymentIntentId must not be empty"));
    }
    let order = state
        .order_service()
        .update_payment_status(id, PaymentStatus::Paid, Some(&payload.payment_intent_id))
        .await?;
    Ok(Json(order))
}
