//! Payment intent creation.

mod common;

use axum::extract::State;
use axum::Json;
use common::{test_state, MockProcessor};
use rust_decimal::Decimal;
use storefront_server::api::payments::handler::{create_intent, CreateIntentRequest};
use storefront_server::utils::AppError;

#[tokio::test]
async fn intent_converts_amount_to_minor_units() {
    let processor = MockProcessor::paid();
    let state = test_state(processor.clone()).await;

    let response = create_intent(
        State(state),
        Json(CreateIntentRequest {
            amount: Decimal::new(2550, 2),
        }),
    )
    .await
    .unwrap();

    assert_eq!(response.0.client_secret, "pi_test_secret_2550");
    let calls = processor.intent_calls.lock().unwrap();
    assert_eq!(calls.as_slice(), &[(2550, "brl".to_string())]);
}

#[tokio::test]
async fn non_positive_amounts_never_reach_the_provider() {
    let processor = MockProcessor::paid();
    let state = test_state(processor.clone()).await;

    for cents in [0, -500] {
        let result = create_intent(
            State(state.clone()),
            Json(CreateIntentRequest {
                amount: Decimal::new(cents, 2),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    assert!(processor.intent_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_amounts_never_reach_the_provider() {
    let processor = MockProcessor::paid();
    let state = test_state(processor.clone()).await;

    // 10^17 in major units does not fit i64 cents
    let result = create_intent(
        State(state),
        Json(CreateIntentRequest {
            amount: Decimal::from(100_000_000_000_000_000i64),
        }),
    )
    .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(processor.intent_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_provider_maps_to_gateway_error() {
    let state = test_state(MockProcessor::unreachable()).await;

    let result = create_intent(
        State(state),
        Json(CreateIntentRequest {
            amount: Decimal::new(1000, 2),
        }),
    )
    .await;
    assert!(matches!(result, Err(AppError::ProviderUnreachable(_))));
}

#[tokio::test]
async fn provider_rejection_is_reported() {
    let state = test_state(MockProcessor::rejected("card declined")).await;

    let result = create_intent(
        State(state),
        Json(CreateIntentRequest {
            amount: Decimal::new(1000, 2),
        }),
    )
    .await;
    match result {
        Err(AppError::ProviderRejected(msg)) => assert_eq!(msg, "card declined"),
        other => panic!("expected provider rejection, got {other:?}"),
    }
}
