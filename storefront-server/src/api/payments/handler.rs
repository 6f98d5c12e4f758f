//! Payment intent handler

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::money;

use crate::core::ServerState;
use crate::payments::ProviderError;
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentRequest {
    /// Amount in major units ("25.50")
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: String,
}

/// POST /api/create-payment-intent
///
/// Validation happens before any provider traffic; the provider sees the
/// amount in minor units.
pub async fn create_intent(
    State(state): State<ServerState>,
    Json(payload): Json<CreateIntentRequest>,
) -> AppResult<Json<CreateIntentResponse>> {
    if payload.amount <= Decimal::ZERO {
        return Err(AppError::validation("amount must be positive"));
    }

    let amount_minor = money::to_minor_units(payload.amount)
        .ok_or_else(|| AppError::validation("amount is out of range"))?;
    let intent = state
        .payments
        .create_intent(amount_minor, &state.config.payment_currency)
        .await
        .map_err(|e| match e {
            ProviderError::Rejected(msg) => AppError::ProviderRejected(msg),
            ProviderError::Unreachable(msg) => AppError::ProviderUnreachable(msg),
        })?;

    Ok(Json(CreateIntentResponse {
        client_secret: intent.client_secret,
    }))
}
