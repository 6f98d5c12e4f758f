//! Order repository
//!
//! Orders are append-only rows; after creation only the payment status,
//! the external payment references and the fulfilment status change.
//! Insert helpers take a connection so the order service can compose
//! them into a single transaction.

use chrono::{DateTime, Utc};
use shared::models::{
    DeliveryAddress, Order, OrderDraft, OrderItem, OrderItemWithProduct, OrderLineItem,
    OrderWithItems,
};
use shared::money;
use shared::types::{OrderStatus, PaymentMethod, PaymentStatus};
use sqlx::{SqliteConnection, SqlitePool};

use super::product::ProductRepository;
use super::{RepoError, RepoResult};

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_name: String,
    customer_email: String,
    customer_phone: Option<String>,
    delivery_address: String,
    payment_method: String,
    payment_status: String,
    order_status: String,
    total_amount: i64,
    delivery_fee: i64,
    establishment_id: i64,
    external_transaction_ref: Option<String>,
    external_order_ref: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepoError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let delivery_address: DeliveryAddress = serde_json::from_str(&row.delivery_address)
            .map_err(|e| RepoError::Database(format!("corrupt delivery address: {e}")))?;
        let payment_method: PaymentMethod =
            row.payment_method.parse().map_err(RepoError::Database)?;
        let payment_status: PaymentStatus =
            row.payment_status.parse().map_err(RepoError::Database)?;
        let order_status: OrderStatus = row.order_status.parse().map_err(RepoError::Database)?;

        Ok(Self {
            id: row.id,
            customer_name: row.customer_name,
            customer_email: row.customer_email,
            customer_phone: row.customer_phone,
            delivery_address,
            payment_method,
            payment_status,
            order_status,
            total_amount: money::from_minor_units(row.total_amount),
            delivery_fee: money::from_minor_units(row.delivery_fee),
            establishment_id: row.establishment_id,
            external_transaction_ref: row.external_transaction_ref,
            external_order_ref: row.external_order_ref,
            created_at: row.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    id: i64,
    order_id: i64,
    product_id: i64,
    quantity: i32,
    price: i64,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            id: row.id,
            order_id: row.order_id,
            product_id: row.product_id,
            quantity: row.quantity,
            price: money::from_minor_units(row.price),
        }
    }
}

#[derive(Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the order row inside the caller's transaction. Returns the
    /// new order id.
    pub async fn insert_order(
        conn: &mut SqliteConnection,
        draft: &OrderDraft,
        payment_status: PaymentStatus,
        external_transaction_ref: Option<&str>,
        external_order_ref: Option<&str>,
        default_delivery_fee: rust_decimal::Decimal,
    ) -> RepoResult<i64> {
        let address = serde_json::to_string(&draft.delivery_address)
            .map_err(|e| RepoError::Database(format!("address serialization: {e}")))?;
        let delivery_fee = draft.delivery_fee.unwrap_or(default_delivery_fee);
        let total_minor = money::to_minor_units(draft.total_amount)
            .ok_or_else(|| RepoError::Validation("totalAmount is out of range".to_string()))?;
        let fee_minor = money::to_minor_units(delivery_fee)
            .ok_or_else(|| RepoError::Validation("deliveryFee is out of range".to_string()))?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO orders \
             (customer_name, customer_email, customer_phone, delivery_address, \
              payment_method, payment_status, order_status, total_amount, delivery_fee, \
              establishment_id, external_transaction_ref, external_order_ref, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id",
        )
        .bind(&draft.customer_name)
        .bind(&draft.customer_email)
        .bind(&draft.customer_phone)
        .bind(&address)
        .bind(draft.payment_method.as_str())
        .bind(payment_status.as_str())
        .bind(OrderStatus::Processing.as_str())
        .bind(total_minor)
        .bind(fee_minor)
        .bind(draft.establishment_id)
        .bind(external_transaction_ref)
        .bind(external_order_ref)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;
        Ok(id)
    }

    /// Insert one line item inside the caller's transaction.
    pub async fn insert_item(
        conn: &mut SqliteConnection,
        order_id: i64,
        item: &OrderLineItem,
    ) -> RepoResult<()> {
        let price_minor = money::to_minor_units(item.price)
            .ok_or_else(|| RepoError::Validation("price is out of range".to_string()))?;
        sqlx::query(
            "INSERT INTO order_items (order_id, product_id, quantity, price) VALUES (?, ?, ?, ?)",
        )
        .bind(order_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .bind(price_minor)
        .execute(conn)
        .await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>> {
        let row: Option<OrderRow> = sqlx::query_as("SELECT * FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Order::try_from).transpose()
    }

    /// Order with its line items and their products.
    pub async fn find_with_items(&self, id: i64) -> RepoResult<Option<OrderWithItems>> {
        let Some(order) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let order_items = self.items_for(order.id).await?;
        Ok(Some(OrderWithItems { order, order_items }))
    }

    /// All orders of an establishment, newest first, with items.
    pub async fn find_by_establishment(
        &self,
        establishment_id: i64,
    ) -> RepoResult<Vec<OrderWithItems>> {
        let rows: Vec<OrderRow> = sqlx::query_as(
            "SELECT * FROM orders WHERE establishment_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(establishment_id)
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let order = Order::try_from(row)?;
            let order_items = self.items_for(order.id).await?;
            result.push(OrderWithItems { order, order_items });
        }
        Ok(result)
    }

    async fn items_for(&self, order_id: i64) -> RepoResult<Vec<OrderItemWithProduct>> {
        let rows: Vec<OrderItemRow> =
            sqlx::query_as("SELECT * FROM order_items WHERE order_id = ? ORDER BY id")
                .bind(order_id)
                .fetch_all(&self.pool)
                .await?;

        let products = ProductRepository::new(self.pool.clone());
        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let item: OrderItem = row.into();
            let product = products.find_by_id(item.product_id).await?.ok_or_else(|| {
                RepoError::Database(format!("order item references missing product {}", item.product_id))
            })?;
            items.push(OrderItemWithProduct { item, product });
        }
        Ok(items)
    }

    /// Unconditional fulfilment-status overwrite; status values are not
    /// ordered and corrections are allowed.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> RepoResult<()> {
        let result = sqlx::query("UPDATE orders SET order_status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("order {id} not found")));
        }
        Ok(())
    }

    /// Overwrite the payment status. The transaction reference is only
    /// filled in when previously absent, so replays keep the first one.
    pub async fn update_payment_status(
        &self,
        id: i64,
        status: PaymentStatus,
        external_transaction_ref: Option<&str>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE orders SET payment_status = ?, \
             external_transaction_ref = COALESCE(external_transaction_ref, ?) \
             WHERE id = ?",
        )
        .bind(status.as_str())
        .bind(external_transaction_ref)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("order {id} not found")));
        }
        Ok(())
    }

    /// Look an order up by either of its provider-side references.
    pub async fn find_by_external_ref(&self, external_ref: &str) -> RepoResult<Option<Order>> {
        let row: Option<OrderRow> = sqlx::query_as(
            "SELECT * FROM orders WHERE external_order_ref = ? OR external_transaction_ref = ? \
             LIMIT 1",
        )
        .bind(external_ref)
        .bind(external_ref)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Order::try_from).transpose()
    }

    /// Today's order count and paid revenue (minor units) for the
    /// establishment. Unpaid orders count toward the order total but
    /// contribute nothing to revenue.
    pub async fn today_stats(&self, establishment_id: i64) -> RepoResult<(i64, i64)> {
        let (count, total): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), \
                    COALESCE(SUM(CASE WHEN payment_status = 'paid' THEN total_amount ELSE 0 END), 0) \
             FROM orders \
             WHERE establishment_id = ? AND date(created_at) = date('now')",
        )
        .bind(establishment_id)
        .fetch_one(&self.pool)
        .await?;
        Ok((count, total))
    }
}
