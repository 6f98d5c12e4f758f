//! Shared test fixtures: in-memory database, a scripted payment processor
//! and request builders.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use shared::models::{DeliveryAddress, OrderDraft, OrderLineItem};
use shared::types::PaymentMethod;
use sqlx::SqlitePool;
use storefront_server::core::{Config, ServerState};
use storefront_server::db::DbService;
use storefront_server::payments::{
    PaymentIntent, PaymentProcessor, ProviderError, ProviderOrderRequest, ProviderOrderResponse,
    ProviderResult,
};
use storefront_server::utils::crypto::hash_password;

pub enum MockFailure {
    Rejected(String),
    Unreachable(String),
}

/// Scripted payment processor; records every call it receives.
pub struct MockProcessor {
    pub intent_calls: Mutex<Vec<(i64, String)>>,
    pub order_calls: Mutex<Vec<ProviderOrderRequest>>,
    failure: Option<MockFailure>,
    order_status: String,
}

impl MockProcessor {
    /// Answers every request successfully with a "paid" order status.
    pub fn paid() -> Arc<Self> {
        Self::with_status("paid")
    }

    pub fn with_status(status: &str) -> Arc<Self> {
        Arc::new(Self {
            intent_calls: Mutex::new(Vec::new()),
            order_calls: Mutex::new(Vec::new()),
            failure: None,
            order_status: status.to_string(),
        })
    }

    pub fn rejected(message: &str) -> Arc<Self> {
        Arc::new(Self {
            intent_calls: Mutex::new(Vec::new()),
            order_calls: Mutex::new(Vec::new()),
            failure: Some(MockFailure::Rejected(message.to_string())),
            order_status: String::new(),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            intent_calls: Mutex::new(Vec::new()),
            order_calls: Mutex::new(Vec::new()),
            failure: Some(MockFailure::Unreachable("connection timed out".to_string())),
            order_status: String::new(),
        })
    }

    fn fail_if_scripted<T>(&self) -> Option<ProviderResult<T>> {
        match &self.failure {
            Some(MockFailure::Rejected(msg)) => Some(Err(ProviderError::Rejected(msg.clone()))),
            Some(MockFailure::Unreachable(msg)) => {
                Some(Err(ProviderError::Unreachable(msg.clone())))
            }
            None => None,
        }
    }
}

#[async_trait]
impl PaymentProcessor for MockProcessor {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> ProviderResult<PaymentIntent> {
        self.intent_calls
            .lock()
            .unwrap()
            .push((amount_minor, currency.to_string()));
        if let Some(result) = self.fail_if_scripted() {
            return result;
        }
        Ok(PaymentIntent {
            id: "pi_test".to_string(),
            client_secret: format!("pi_test_secret_{amount_minor}"),
        })
    }

    async fn create_order(
        &self,
        request: &ProviderOrderRequest,
    ) -> ProviderResult<ProviderOrderResponse> {
        self.order_calls.lock().unwrap().push(request.clone());
        if let Some(result) = self.fail_if_scripted() {
            return result;
        }
        let pending = self.order_status != "paid";
        Ok(ProviderOrderResponse {
            order_id: "or_test_1".to_string(),
            transaction_id: Some("tr_test_1".to_string()),
            status: self.order_status.clone(),
            qr_code: pending.then(|| "qr-code-payload".to_string()),
            qr_code_expires_at: pending.then(|| "2026-01-01T00:00:00Z".to_string()),
        })
    }
}

fn test_config() -> Config {
    Config {
        http_port: 0,
        database_path: ":memory:".to_string(),
        provider_base_url: "http://provider.invalid".to_string(),
        provider_api_key: "sk_test".to_string(),
        provider_timeout_ms: 1000,
        default_delivery_fee: Decimal::new(500, 2),
        payment_currency: "brl".to_string(),
        seed_on_start: false,
        log_dir: None,
        environment: "development".to_string(),
    }
}

/// Fresh state over an in-memory database with known fixtures.
pub async fn test_state(payments: Arc<MockProcessor>) -> ServerState {
    let db = DbService::in_memory().await.unwrap();
    insert_fixtures(&db.pool).await;
    ServerState {
        config: test_config(),
        db,
        payments,
        admin_sessions: Arc::new(DashMap::new()),
    }
}

/// One establishment, one category, two products and an admin account.
async fn insert_fixtures(pool: &SqlitePool) {
    sqlx::query(
        "INSERT INTO establishments (id, name, type, description, icon, is_active) \
         VALUES (1, 'Mercado Teste', 'supermarket', 'test market', '🛒', 1)",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO categories (id, name, icon, color, establishment_id) \
         VALUES (1, 'Grãos', '🌾', '#aabbcc', 1)",
    )
    .execute(pool)
    .await
    .unwrap();

    // prices in minor units: 10.00 and 8.99
    sqlx::query(
        "INSERT INTO products \
         (id, name, description, price, original_price, unit, stock, image_url, \
          is_active, is_featured, category_id, establishment_id, created_at) \
         VALUES \
         (1, 'Arroz Tipo 1', 'White rice 5kg bag', 1000, NULL, 'unit', 50, NULL, 1, 1, 1, 1, ?), \
         (2, 'Feijão Carioca', 'Beans 1kg', 899, 999, 'unit', 80, NULL, 1, 0, 1, 1, ?)",
    )
    .bind(chrono::Utc::now())
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO admin_users (id, username, email, password_hash, is_active, created_at) \
         VALUES (1, 'admin', 'admin@example.com', ?, 1, ?)",
    )
    .bind(hash_password("secret123"))
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .unwrap();
}

pub fn address() -> DeliveryAddress {
    DeliveryAddress {
        zip_code: "01310-100".to_string(),
        street: "Avenida Paulista".to_string(),
        number: "1000".to_string(),
        complement: None,
        neighborhood: "Bela Vista".to_string(),
        city: "São Paulo".to_string(),
        state: Some("SP".to_string()),
    }
}

pub fn draft(establishment_id: i64, total_cents: i64) -> OrderDraft {
    OrderDraft {
        customer_name: "Maria Souza".to_string(),
        customer_email: "maria@example.com".to_string(),
        customer_phone: Some("11999990000".to_string()),
        delivery_address: address(),
        payment_method: PaymentMethod::InstantTransfer,
        total_amount: Decimal::new(total_cents, 2),
        delivery_fee: None,
        establishment_id,
    }
}

pub fn line_item(product_id: i64, quantity: i32, price_cents: i64) -> OrderLineItem {
    OrderLineItem {
        product_id,
        quantity,
        price: Decimal::new(price_cents, 2),
    }
}
