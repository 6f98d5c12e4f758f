//! Payment provider handlers
//!
//! The remote-order flow charges first and persists second: the provider's
//! refusal means no local order row exists at all. The webhook endpoint
//! acknowledges everything it can parse so the provider stops retrying.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::models::{DeliveryAddress, OrderDraft, OrderLineItem};
use shared::money;
use shared::types::PaymentMethod;
use tracing::{error, warn};

use crate::core::ServerState;
use crate::payments::status::map_order_status;
use crate::payments::{
    CardDetails, ProviderAddress, ProviderCustomer, ProviderError, ProviderLineItem,
    ProviderOrderRequest,
};
use crate::services::reconciler::WebhookEvent;
use crate::utils::{AppError, AppResult};

/// How long an instant-transfer payment code stays payable.
const INSTANT_TRANSFER_EXPIRY_SECS: i64 = 3600;

#[derive(Deserialize)]
pub struct CustomerPayload {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct AddressPayload {
    #[serde(alias = "zipcode")]
    pub zip_code: String,
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Deserialize)]
pub struct ItemPayload {
    /// Local product id
    pub id: i64,
    pub description: String,
    pub quantity: i32,
    /// Unit price in minor units
    pub price: i64,
}

#[derive(Deserialize)]
pub struct CreateRemoteOrderRequest {
    pub customer: CustomerPayload,
    pub address: AddressPayload,
    pub items: Vec<ItemPayload>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub card: Option<CardDetails>,
    pub establishment_id: i64,
    /// Delivery fee in minor units; falls back to the configured default
    #[serde(default)]
    pub delivery_fee: Option<i64>,
    /// Grand total in minor units
    pub total_amount: i64,
}

#[derive(Serialize)]
pub struct CreateRemoteOrderResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_order_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_transaction_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code_expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateRemoteOrderResponse {
    fn refused(error: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: None,
            external_order_ref: None,
            external_transaction_ref: None,
            status: None,
            qr_code: None,
            qr_code_expires_at: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

/// POST /api/payment-provider/create-order
///
/// Card payments require card details up front. The draft is validated
/// and the establishment confirmed before the provider sees the charge;
/// only an accepting answer ("paid" or a waiting status) then creates
/// the local order, with the provider references attached.
pub async fn create_order(
    State(state): State<ServerState>,
    Json(payload): Json<CreateRemoteOrderRequest>,
) -> AppResult<Json<CreateRemoteOrderResponse>> {
    if payload.total_amount <= 0 {
        return Err(AppError::validation("total_amount must be positive"));
    }
    if payload.payment_method == PaymentMethod::CreditCard && payload.card.is_none() {
        return Err(AppError::validation(
            "card details are required for credit card payments",
        ));
    }

    let draft = OrderDraft {
        customer_name: payload.customer.name.clone(),
        customer_email: payload.customer.email.clone(),
        customer_phone: payload.customer.phone.clone(),
        delivery_address: DeliveryAddress {
            zip_code: payload.address.zip_code.clone(),
            street: payload.address.street.clone(),
            number: payload.address.number.clone(),
            complement: payload.address.complement.clone(),
            neighborhood: payload.address.neighborhood.clone(),
            city: payload.address.city.clone(),
            state: payload.address.state.clone(),
        },
        payment_method: payload.payment_method,
        total_amount: money::from_minor_units(payload.total_amount),
        delivery_fee: payload.delivery_fee.map(money::from_minor_units),
        establishment_id: payload.establishment_id,
    };
    let items: Vec<OrderLineItem> = payload
        .items
        .iter()
        .map(|item| OrderLineItem {
            product_id: item.id,
            quantity: item.quantity,
            price: money::from_minor_units(item.price),
        })
        .collect();

    // nothing may reach the provider until the order is known to be
    // persistable locally
    state.order_service().precheck(&draft, &items).await?;

    let shipping_fee = match payload.delivery_fee {
        Some(fee) => fee,
        None => money::to_minor_units(state.config.default_delivery_fee)
            .ok_or_else(|| AppError::internal("default delivery fee is out of range"))?,
    };

    let request = ProviderOrderRequest {
        customer: ProviderCustomer {
            name: payload.customer.name,
            email: payload.customer.email,
            phone: payload.customer.phone,
        },
        address: ProviderAddress {
            zip_code: payload.address.zip_code,
            street: payload.address.street,
            number: payload.address.number,
            complement: payload.address.complement,
            neighborhood: payload.address.neighborhood,
            city: payload.address.city,
            state: payload.address.state,
        },
        items: payload
            .items
            .into_iter()
            .map(|item| ProviderLineItem {
                id: item.id,
                description: item.description,
                quantity: item.quantity,
                amount: item.price,
            })
            .collect(),
        payment_method: payload.payment_method,
        card: payload.card,
        expires_in: (payload.payment_method == PaymentMethod::InstantTransfer)
            .then_some(INSTANT_TRANSFER_EXPIRY_SECS),
        shipping_fee,
        total_amount: payload.total_amount,
    };

    let response = match state.payments.create_order(&request).await {
        Ok(response) => response,
        Err(ProviderError::Rejected(msg)) => {
            warn!(error = %msg, "provider refused remote order");
            return Ok(Json(CreateRemoteOrderResponse::refused(msg)));
        }
        Err(ProviderError::Unreachable(msg)) => {
            return Err(AppError::ProviderUnreachable(msg));
        }
    };

    let Some(payment_status) = map_order_status(&response.status) else {
        warn!(status = %response.status, "provider answered with a refusing status");
        return Ok(Json(CreateRemoteOrderResponse::refused(format!(
            "payment refused (status: {})",
            response.status
        ))));
    };

    let order = state
        .order_service()
        .create_order_with_status(
            draft,
            items,
            payment_status,
            response.transaction_id.as_deref(),
            Some(&response.order_id),
        )
        .await?;

    Ok(Json(CreateRemoteOrderResponse {
        success: true,
        order_id: Some(order.order.id),
        external_order_ref: Some(response.order_id),
        external_transaction_ref: response.transaction_id,
        status: Some(response.status),
        qr_code: response.qr_code,
        qr_code_expires_at: response.qr_code_expires_at,
        error: None,
    }))
}

/// POST /api/payment-provider/webhook
///
/// Only a malformed payload is an error; anything that goes wrong past
/// deserialization is logged and acknowledged so the provider does not
/// keep redelivering.
pub async fn webhook(
    State(state): State<ServerState>,
    Json(event): Json<WebhookEvent>,
) -> Json<WebhookAck> {
    if let Err(e) = state.reconciler().handle(&event).await {
        error!(
            error = %e,
            event_type = %event.event_type,
            "webhook reconciliation failed, acknowledged anyway"
        );
    }
    Json(WebhookAck { received: true })
}
