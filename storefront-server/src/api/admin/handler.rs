//! Admin API handlers
//!
//! Sessions are opaque random tokens held in memory; a restart logs every
//! admin out.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::AdminUser;
use shared::money;
use tracing::info;

use crate::core::state::AdminSession;
use crate::core::ServerState;
use crate::db::repository::{AdminRepository, EstablishmentRepository, OrderRepository, ProductRepository};
use crate::utils::crypto::{generate_token, verify_password};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub admin: AdminUser,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub todays_sales: Decimal,
    pub todays_orders: i64,
    pub total_products: i64,
    pub total_establishments: i64,
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = AdminRepository::new(state.db.pool.clone());
    let admin = repo
        .find_by_username(&payload.username)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&payload.password, &admin.password_hash) {
        return Err(AppError::invalid_credentials());
    }

    let token = generate_token();
    state.admin_sessions.insert(
        token.clone(),
        AdminSession {
            admin_id: admin.id,
            username: admin.username.clone(),
            issued_at: Utc::now(),
        },
    );
    info!(admin_id = admin.id, "admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        token,
        admin,
    }))
}

/// POST /api/admin/forgot-password
///
/// No mail delivery is wired up; the reset request is logged for the
/// operator to act on.
pub async fn forgot_password(
    State(state): State<ServerState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> AppResult<Json<ForgotPasswordResponse>> {
    let repo = AdminRepository::new(state.db.pool.clone());
    let admin = repo
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(|| AppError::not_found("no account with that email"))?;

    info!(
        admin_id = admin.id,
        email = %admin.email,
        "password reset requested"
    );

    Ok(Json(ForgotPasswordResponse {
        success: true,
        message: "Password reset request received".to_string(),
    }))
}

/// GET /api/establishments/{id}/stats - dashboard numbers
pub async fn stats(
    State(state): State<ServerState>,
    Path(establishment_id): Path<i64>,
) -> AppResult<Json<StatsResponse>> {
    let establishments = EstablishmentRepository::new(state.db.pool.clone());
    if !establishments.exists(establishment_id).await? {
        return Err(AppError::not_found(format!(
            "establishment {establishment_id} not found"
        )));
    }

    let orders = OrderRepository::new(state.db.pool.clone());
    let products = ProductRepository::new(state.db.pool.clone());

    let (todays_orders, todays_sales_minor) = orders.today_stats(establishment_id).await?;
    let total_products = products.count_by_establishment(establishment_id).await?;
    let total_establishments = establishments.count().await?;

    Ok(Json(StatsResponse {
        todays_sales: money::from_minor_units(todays_sales_minor),
        todays_orders,
        total_products,
        total_establishments,
    }))
}
