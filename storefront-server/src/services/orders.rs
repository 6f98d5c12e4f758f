//! Order service
//!
//! Order creation writes the order row, its line items and the sales
//! aggregates in one transaction: either everything lands or nothing does.
//! Validation happens before the first write.

use rust_decimal::Decimal;
use shared::models::{Order, OrderDraft, OrderLineItem, OrderWithItems};
use shared::types::{OrderStatus, PaymentStatus};
use sqlx::SqlitePool;

use crate::db::repository::{EstablishmentRepository, OrderRepository};
use crate::services::sales;
use crate::utils::validation::{
    validate_optional_text, validate_required_text, MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN,
    MAX_SHORT_TEXT_LEN,
};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct OrderService {
    pool: SqlitePool,
    default_delivery_fee: Decimal,
}

impl OrderService {
    pub fn new(pool: SqlitePool, default_delivery_fee: Decimal) -> Self {
        Self {
            pool,
            default_delivery_fee,
        }
    }

    /// Create a local order with a pending payment.
    pub async fn create_order(
        &self,
        draft: OrderDraft,
        items: Vec<OrderLineItem>,
    ) -> AppResult<OrderWithItems> {
        self.create_order_with_status(draft, items, PaymentStatus::Pending, None, None)
            .await
    }

    /// Create an order with an explicit payment status and provider
    /// references. Used by the remote-payment flow, where the provider has
    /// already answered before anything is persisted.
    pub async fn create_order_with_status(
        &self,
        draft: OrderDraft,
        items: Vec<OrderLineItem>,
        payment_status: PaymentStatus,
        external_transaction_ref: Option<&str>,
        external_order_ref: Option<&str>,
    ) -> AppResult<OrderWithItems> {
        self.precheck(&draft, &items).await?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let order_id = OrderRepository::insert_order(
            &mut *tx,
            &draft,
            payment_status,
            external_transaction_ref,
            external_order_ref,
            self.default_delivery_fee,
        )
        .await?;

        for (index, item) in items.iter().enumerate() {
            OrderRepository::insert_item(&mut *tx, order_id, item)
                .await
                .map_err(|e| {
                    AppError::database(format!("order item {}: {e}", index + 1))
                })?;
            sales::record_sale(&mut *tx, item.product_id, item.quantity, item.price).await?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        tracing::info!(
            order_id,
            establishment_id = draft.establishment_id,
            items = items.len(),
            payment_status = payment_status.as_str(),
            "order created"
        );

        let orders = OrderRepository::new(self.pool.clone());
        orders
            .find_with_items(order_id)
            .await?
            .ok_or_else(|| AppError::internal(format!("order {order_id} vanished after insert")))
    }

    /// Overwrite the fulfilment status and return the updated order.
    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> AppResult<Order> {
        let orders = OrderRepository::new(self.pool.clone());
        orders.update_status(order_id, status).await?;
        tracing::info!(order_id, status = status.as_str(), "order status updated");
        self.reload(&orders, order_id).await
    }

    /// Overwrite the payment status, optionally attaching a provider
    /// transaction reference. Returns the updated order.
    pub async fn update_payment_status(
        &self,
        order_id: i64,
        status: PaymentStatus,
        external_transaction_ref: Option<&str>,
    ) -> AppResult<Order> {
        let orders = OrderRepository::new(self.pool.clone());
        orders
            .update_payment_status(order_id, status, external_transaction_ref)
            .await?;
        tracing::info!(order_id, status = status.as_str(), "payment status updated");
        self.reload(&orders, order_id).await
    }

    async fn reload(&self, orders: &OrderRepository, order_id: i64) -> AppResult<Order> {
        orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::internal(format!("order {order_id} vanished after update")))
    }

    /// Validate a draft and its items and confirm the establishment exists,
    /// without writing anything. Callers that charge an external party
    /// before persisting run this first.
    pub async fn precheck(&self, draft: &OrderDraft, items: &[OrderLineItem]) -> AppResult<()> {
        self.validate(draft, items)?;

        let establishments = EstablishmentRepository::new(self.pool.clone());
        if !establishments.exists(draft.establishment_id).await? {
            return Err(AppError::not_found(format!(
                "establishment {} not found",
                draft.establishment_id
            )));
        }
        Ok(())
    }

    fn validate(&self, draft: &OrderDraft, items: &[OrderLineItem]) -> AppResult<()> {
        validate_required_text(&draft.customer_name, "customerName", MAX_NAME_LEN)?;
        validate_required_text(&draft.customer_email, "customerEmail", MAX_EMAIL_LEN)?;
        if !draft.customer_email.contains('@') {
            return Err(AppError::validation("customerEmail is not an email address"));
        }
        validate_optional_text(&draft.customer_phone, "customerPhone", MAX_SHORT_TEXT_LEN)?;

        let address = &draft.delivery_address;
        validate_required_text(&address.zip_code, "zipCode", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&address.street, "street", MAX_ADDRESS_LEN)?;
        validate_required_text(&address.number, "number", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&address.neighborhood, "neighborhood", MAX_ADDRESS_LEN)?;
        validate_required_text(&address.city, "city", MAX_NAME_LEN)?;

        if draft.total_amount <= Decimal::ZERO {
            return Err(AppError::validation("totalAmount must be positive"));
        }
        if let Some(fee) = draft.delivery_fee
            && fee < Decimal::ZERO
        {
            return Err(AppError::validation("deliveryFee must not be negative"));
        }

        if items.is_empty() {
            return Err(AppError::validation("order must contain at least one item"));
        }
        for (index, item) in items.iter().enumerate() {
            if item.quantity <= 0 {
                return Err(AppError::validation(format!(
                    "item {}: quantity must be positive",
                    index + 1
                )));
            }
            if item.price < Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "item {}: price must not be negative",
                    index + 1
                )));
            }
        }
        Ok(())
    }
}
