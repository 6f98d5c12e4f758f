//! Server state
//!
//! Everything handlers need, cloned cheaply into each request.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::core::Config;
use crate::db::{seed, DbService};
use crate::payments::{HttpPaymentProcessor, PaymentProcessor};
use crate::services::{OrderService, WebhookReconciler};
use crate::utils::AppError;

/// An issued admin session token.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin_id: i64,
    pub username: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub payments: Arc<dyn PaymentProcessor>,
    /// token -> session, in-memory only
    pub admin_sessions: Arc<DashMap<String, AdminSession>>,
}

impl ServerState {
    /// Open the database, run migrations, seed if configured and wire up
    /// the payment processor.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;

        if config.seed_on_start && config.is_development() {
            seed::seed_if_empty(&db.pool).await?;
        }

        let payments = HttpPaymentProcessor::new(
            config.provider_base_url.clone(),
            config.provider_api_key.clone(),
            Duration::from_millis(config.provider_timeout_ms),
        )
        .map_err(AppError::Internal)?;

        Ok(Self {
            config: config.clone(),
            db,
            payments: Arc::new(payments),
            admin_sessions: Arc::new(DashMap::new()),
        })
    }

    pub fn order_service(&self) -> OrderService {
        OrderService::new(self.db.pool.clone(), self.config.default_delivery_fee)
    }

    pub fn reconciler(&self) -> WebhookReconciler {
        WebhookReconciler::new(self.db.pool.clone())
    }
}
