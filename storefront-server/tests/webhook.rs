//! Webhook reconciliation: idempotent, tolerant, last write wins.

mod common;

use axum::extract::State;
use axum::Json;
use common::{draft, line_item, test_state, MockProcessor};
use shared::types::PaymentStatus;
use storefront_server::api::provider::handler::webhook;
use storefront_server::db::repository::OrderRepository;
use storefront_server::services::reconciler::{WebhookData, WebhookEvent};

fn event(event_type: &str, external_ref: &str) -> WebhookEvent {
    WebhookEvent {
        event_type: event_type.to_string(),
        data: WebhookData {
            id: external_ref.to_string(),
        },
    }
}

/// Creates a pending order carrying the given provider order reference.
async fn pending_order_with_ref(state: &storefront_server::ServerState, external_ref: &str) -> i64 {
    let order = state
        .order_service()
        .create_order_with_status(
            draft(1, 1000),
            vec![line_item(1, 1, 1000)],
            PaymentStatus::Pending,
            None,
            Some(external_ref),
        )
        .await
        .unwrap();
    order.order.id
}

#[tokio::test]
async fn paid_event_marks_the_order_paid() {
    let state = test_state(MockProcessor::paid()).await;
    let order_id = pending_order_with_ref(&state, "or_abc").await;

    state
        .reconciler()
        .handle(&event("order.paid", "or_abc"))
        .await
        .unwrap();

    let orders = OrderRepository::new(state.db.pool.clone());
    let order = orders.find_by_id(order_id).await.unwrap().unwrap();
    assert_eq!(order.payment_status, PaymentStatus::Paid);
}

#[tokio::test]
async fn replayed_event_is_idempotent() {
    let state = test_state(MockProcessor::paid()).await;
    let order_id = pending_order_with_ref(&state, "or_abc").await;

    for _ in 0..3 {
        state
            .reconciler()
            .handle(&event("charge.paid", "or_abc"))
            .await
            .unwrap();
    }

    let orders = OrderRepository::new(state.db.pool.clone());
    let order = orders.find_by_id(order_id).await.unwrap().unwrap();
    assert_eq!(order.payment_status, PaymentStatus::Paid);
    // the reference recorded by the first delivery is kept
    assert_eq!(order.external_transaction_ref.as_deref(), Some("or_abc"));
}

#[tokio::test]
async fn out_of_order_delivery_last_write_wins() {
    let state = test_state(MockProcessor::paid()).await;
    let order_id = pending_order_with_ref(&state, "or_abc").await;

    state
        .reconciler()
        .handle(&event("order.paid", "or_abc"))
        .await
        .unwrap();
    state
        .reconciler()
        .handle(&event("order.payment_failed", "or_abc"))
        .await
        .unwrap();

    let orders = OrderRepository::new(state.db.pool.clone());
    let order = orders.find_by_id(order_id).await.unwrap().unwrap();
    assert_eq!(order.payment_status, PaymentStatus::Failed);
}

#[tokio::test]
async fn unknown_reference_is_acknowledged() {
    let state = test_state(MockProcessor::paid()).await;
    // no orders exist; the event must still be accepted
    state
        .reconciler()
        .handle(&event("order.paid", "or_nobody_knows"))
        .await
        .unwrap();
}

#[tokio::test]
async fn unrelated_event_changes_nothing() {
    let state = test_state(MockProcessor::paid()).await;
    let order_id = pending_order_with_ref(&state, "or_abc").await;

    state
        .reconciler()
        .handle(&event("customer.updated", "or_abc"))
        .await
        .unwrap();

    let orders = OrderRepository::new(state.db.pool.clone());
    let order = orders.find_by_id(order_id).await.unwrap().unwrap();
    assert_eq!(order.payment_status, PaymentStatus::Pending);
}

#[tokio::test]
async fn webhook_endpoint_acknowledges_when_the_database_is_down() {
    let state = test_state(MockProcessor::paid()).await;
    state.db.pool.close().await;

    let ack = webhook(State(state), Json(event("order.paid", "or_abc"))).await.0;
    assert!(ack.received);
}

#[tokio::test]
async fn lookup_matches_the_transaction_reference_too() {
    let state = test_state(MockProcessor::paid()).await;
    let order = state
        .order_service()
        .create_order_with_status(
            draft(1, 1000),
            vec![line_item(1, 1, 1000)],
            PaymentStatus::Pending,
            Some("tr_xyz"),
            Some("or_abc"),
        )
        .await
        .unwrap();

    state
        .reconciler()
        .handle(&event("charge.paid", "tr_xyz"))
        .await
        .unwrap();

    let orders = OrderRepository::new(state.db.pool.clone());
    let reloaded = orders.find_by_id(order.order.id).await.unwrap().unwrap();
    assert_eq!(reloaded.payment_status, PaymentStatus::Paid);
}
