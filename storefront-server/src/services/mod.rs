//! Business services
//!
//! Order creation, sales aggregation and webhook reconciliation sit here,
//! between the HTTP handlers and the repositories.

pub mod orders;
pub mod reconciler;
pub mod sales;

pub use orders::OrderService;
pub use reconciler::WebhookReconciler;
