//! Admin login, password reset requests and dashboard stats.

mod common;

use axum::extract::{Path, State};
use axum::Json;
use common::{draft, line_item, test_state, MockProcessor};
use rust_decimal::Decimal;
use shared::types::PaymentStatus;
use storefront_server::api::admin::handler::{
    forgot_password, login, stats, ForgotPasswordRequest, LoginRequest,
};
use storefront_server::utils::AppError;

#[tokio::test]
async fn login_issues_a_session_token() {
    let state = test_state(MockProcessor::paid()).await;

    let response = login(
        State(state.clone()),
        Json(LoginRequest {
            username: "admin".to_string(),
            password: "secret123".to_string(),
        }),
    )
    .await
    .unwrap()
    .0;

    assert!(response.success);
    // 32 random bytes, hex encoded
    assert_eq!(response.token.len(), 64);
    assert_eq!(response.admin.username, "admin");
    assert!(state.admin_sessions.contains_key(&response.token));
}

#[tokio::test]
async fn wrong_password_and_unknown_user_fail_the_same_way() {
    let state = test_state(MockProcessor::paid()).await;

    let wrong_password = login(
        State(state.clone()),
        Json(LoginRequest {
            username: "admin".to_string(),
            password: "nope".to_string(),
        }),
    )
    .await;
    let unknown_user = login(
        State(state.clone()),
        Json(LoginRequest {
            username: "ghost".to_string(),
            password: "secret123".to_string(),
        }),
    )
    .await;

    for result in [wrong_password, unknown_user] {
        match result {
            Err(AppError::Invalid(msg)) => assert_eq!(msg, "Invalid username or password"),
            other => panic!("expected invalid credentials, got {other:?}"),
        }
    }
    assert!(state.admin_sessions.is_empty());
}

#[tokio::test]
async fn serialized_admin_never_exposes_the_password_hash() {
    let state = test_state(MockProcessor::paid()).await;
    let response = login(
        State(state),
        Json(LoginRequest {
            username: "admin".to_string(),
            password: "secret123".to_string(),
        }),
    )
    .await
    .unwrap()
    .0;

    let json = serde_json::to_value(&response.admin).unwrap();
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
}

#[tokio::test]
async fn forgot_password_acknowledges_known_emails_only() {
    let state = test_state(MockProcessor::paid()).await;

    let known = forgot_password(
        State(state.clone()),
        Json(ForgotPasswordRequest {
            email: "admin@example.com".to_string(),
        }),
    )
    .await
    .unwrap()
    .0;
    assert!(known.success);

    let unknown = forgot_password(
        State(state),
        Json(ForgotPasswordRequest {
            email: "ghost@example.com".to_string(),
        }),
    )
    .await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn stats_count_all_orders_but_only_paid_revenue() {
    let state = test_state(MockProcessor::paid()).await;
    let paid = state
        .order_service()
        .create_order(draft(1, 3000), vec![line_item(1, 3, 1000)])
        .await
        .unwrap();
    state
        .order_service()
        .update_payment_status(paid.order.id, PaymentStatus::Paid, None)
        .await
        .unwrap();
    // stays pending, counts as an order but not as revenue
    state
        .order_service()
        .create_order(draft(1, 899), vec![line_item(2, 1, 899)])
        .await
        .unwrap();

    let response = stats(State(state), Path(1)).await.unwrap().0;
    assert_eq!(response.todays_orders, 2);
    assert_eq!(response.todays_sales, Decimal::new(3000, 2));
    assert_eq!(response.total_products, 2);
    assert_eq!(response.total_establishments, 1);
}

#[tokio::test]
async fn stats_for_unknown_establishment_are_not_found() {
    let state = test_state(MockProcessor::paid()).await;
    let result = stats(State(state), Path(99)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
