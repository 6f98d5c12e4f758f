//! Remote order flow: the provider is charged before anything is persisted.

mod common;

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use common::{test_state, MockProcessor};
use shared::types::{PaymentMethod, PaymentStatus};
use storefront_server::api::provider::handler::{
    create_order, AddressPayload, CreateRemoteOrderRequest, CustomerPayload, ItemPayload,
};
use storefront_server::db::repository::{OrderRepository, SalesRepository};
use storefront_server::payments::CardDetails;
use storefront_server::utils::AppError;

fn request(payment_method: PaymentMethod, card: Option<CardDetails>) -> CreateRemoteOrderRequest {
    CreateRemoteOrderRequest {
        customer: CustomerPayload {
            name: "Maria Souza".to_string(),
            email: "maria@example.com".to_string(),
            phone: None,
        },
        address: AddressPayload {
            zip_code: "01310-100".to_string(),
            street: "Avenida Paulista".to_string(),
            number: "1000".to_string(),
            complement: None,
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            state: Some("SP".to_string()),
        },
        items: vec![ItemPayload {
            id: 1,
            description: "Arroz Tipo 1".to_string(),
            quantity: 2,
            price: 1000,
        }],
        payment_method,
        card,
        establishment_id: 1,
        delivery_fee: Some(500),
        total_amount: 2000,
    }
}

fn card() -> CardDetails {
    CardDetails {
        number: "4111111111111111".to_string(),
        holder_name: "MARIA SOUZA".to_string(),
        exp_month: 12,
        exp_year: 2030,
        cvv: "123".to_string(),
    }
}

#[tokio::test]
async fn paid_answer_persists_a_paid_order_with_references() {
    let processor = MockProcessor::paid();
    let state = test_state(processor.clone()).await;

    let response = create_order(
        State(state.clone()),
        Json(request(PaymentMethod::InstantTransfer, None)),
    )
    .await
    .unwrap()
    .0;

    assert!(response.success);
    assert_eq!(response.external_order_ref.as_deref(), Some("or_test_1"));
    assert_eq!(
        response.external_transaction_ref.as_deref(),
        Some("tr_test_1")
    );

    let orders = OrderRepository::new(state.db.pool.clone());
    let order = orders
        .find_by_id(response.order_id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.payment_status, PaymentStatus::Paid);
    assert_eq!(order.external_order_ref.as_deref(), Some("or_test_1"));

    // the sale was counted as part of the same creation
    let sales = SalesRepository::new(state.db.pool.clone());
    assert_eq!(sales.find_by_product(1).await.unwrap().unwrap().quantity_sold, 2);

    // instant transfer requests carry a payment code expiry window
    let calls = processor.order_calls.lock().unwrap();
    assert_eq!(calls[0].expires_in, Some(3600));
}

#[tokio::test]
async fn waiting_answer_persists_a_pending_order_with_qr_code() {
    let state = test_state(MockProcessor::with_status("waiting_payment")).await;

    let response = create_order(
        State(state.clone()),
        Json(request(PaymentMethod::InstantTransfer, None)),
    )
    .await
    .unwrap()
    .0;

    assert!(response.success);
    assert_eq!(response.qr_code.as_deref(), Some("qr-code-payload"));

    let orders = OrderRepository::new(state.db.pool.clone());
    let order = orders
        .find_by_id(response.order_id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.payment_status, PaymentStatus::Pending);
}

#[tokio::test]
async fn provider_refusal_leaves_no_trace() {
    let state = test_state(MockProcessor::rejected("insufficient funds")).await;

    let response = create_order(
        State(state.clone()),
        Json(request(PaymentMethod::InstantTransfer, None)),
    )
    .await
    .unwrap()
    .0;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("insufficient funds"));
    assert!(response.order_id.is_none());

    let orders = OrderRepository::new(state.db.pool.clone());
    assert!(orders.find_by_establishment(1).await.unwrap().is_empty());
    let sales = SalesRepository::new(state.db.pool.clone());
    assert!(sales.find_by_product(1).await.unwrap().is_none());
}

#[tokio::test]
async fn refusing_status_string_also_leaves_no_trace() {
    let state = test_state(MockProcessor::with_status("refused")).await;

    let response = create_order(
        State(state.clone()),
        Json(request(PaymentMethod::InstantTransfer, None)),
    )
    .await
    .unwrap()
    .0;

    assert!(!response.success);
    let orders = OrderRepository::new(state.db.pool.clone());
    assert!(orders.find_by_establishment(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_provider_is_a_gateway_error() {
    let state = test_state(MockProcessor::unreachable()).await;
    let result = create_order(
        State(state.clone()),
        Json(request(PaymentMethod::InstantTransfer, None)),
    )
    .await;
    assert!(matches!(result, Err(AppError::ProviderUnreachable(_))));

    let orders = OrderRepository::new(state.db.pool.clone());
    assert!(orders.find_by_establishment(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn credit_card_without_card_details_never_reaches_the_provider() {
    let processor = MockProcessor::paid();
    let state = test_state(processor.clone()).await;

    let result = create_order(State(state), Json(request(PaymentMethod::CreditCard, None))).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(processor.order_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn credit_card_with_details_goes_through() {
    let processor = MockProcessor::paid();
    let state = test_state(processor.clone()).await;

    let response = create_order(
        State(state),
        Json(request(PaymentMethod::CreditCard, Some(card()))),
    )
    .await
    .unwrap()
    .0;
    assert!(response.success);

    let calls = processor.order_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].total_amount, 2000);
    assert_eq!(calls[0].shipping_fee, 500);
    assert!(calls[0].card.is_some());
    assert!(calls[0].expires_in.is_none());
}

#[tokio::test]
async fn unknown_establishment_never_reaches_the_provider() {
    let processor = MockProcessor::paid();
    let state = test_state(processor.clone()).await;

    let mut payload = request(PaymentMethod::InstantTransfer, None);
    payload.establishment_id = 42;
    let result = create_order(State(state.clone()), Json(payload)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(processor.order_calls.lock().unwrap().is_empty());
    let orders = OrderRepository::new(state.db.pool.clone());
    assert!(orders.find_by_establishment(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_customer_name_never_reaches_the_provider() {
    let processor = MockProcessor::paid();
    let state = test_state(processor.clone()).await;

    let mut payload = request(PaymentMethod::InstantTransfer, None);
    payload.customer.name = "   ".to_string();
    let result = create_order(State(state), Json(payload)).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(processor.order_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn non_positive_total_is_refused_up_front() {
    let processor = MockProcessor::paid();
    let state = test_state(Arc::clone(&processor)).await;

    let mut payload = request(PaymentMethod::InstantTransfer, None);
    payload.total_amount = 0;
    let result = create_order(State(state), Json(payload)).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(processor.order_calls.lock().unwrap().is_empty());
}
