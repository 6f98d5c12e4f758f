//! Webhook reconciler
//!
//! Applies provider webhook events to local orders. Unknown event types
//! and unknown references are acknowledged without error so the provider
//! stops retrying, and repeated deliveries of the same event are
//! idempotent.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::db::repository::OrderRepository;
use crate::payments::status::map_webhook_event;
use crate::utils::AppResult;

/// Provider webhook envelope: `{ "type": "...", "data": { "id": "..." } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: WebhookData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookData {
    /// Provider-side order or transaction reference
    pub id: String,
}

#[derive(Clone)]
pub struct WebhookReconciler {
    pool: SqlitePool,
}

impl WebhookReconciler {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply one webhook event. Always `Ok` for well-formed events; the
    /// last delivered event wins regardless of arrival order.
    pub async fn handle(&self, event: &WebhookEvent) -> AppResult<()> {
        let Some(status) = map_webhook_event(&event.event_type) else {
            debug!(event_type = %event.event_type, "ignoring webhook event");
            return Ok(());
        };

        let orders = OrderRepository::new(self.pool.clone());
        let Some(order) = orders.find_by_external_ref(&event.data.id).await? else {
            info!(
                external_ref = %event.data.id,
                event_type = %event.event_type,
                "webhook for unknown order reference, acknowledged"
            );
            return Ok(());
        };

        orders
            .update_payment_status(order.id, status, Some(&event.data.id))
            .await?;
        info!(
            order_id = order.id,
            status = status.as_str(),
            event_type = %event.event_type,
            "payment status reconciled from webhook"
        );
        Ok(())
    }
}
