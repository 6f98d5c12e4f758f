//! Provider status mapping
//!
//! Pure translation from vendor status strings and webhook event names to
//! the local payment status. Unknown values map to `None` so callers can
//! decide how to react.

use shared::types::PaymentStatus;

/// Map a provider order status to the local payment status.
///
/// Statuses that mean "still waiting" keep the order pending; anything
/// unrecognized is reported as `None` and the caller refuses the order.
pub fn map_order_status(provider_status: &str) -> Option<PaymentStatus> {
    match provider_status {
        "paid" => Some(PaymentStatus::Paid),
        "pending" | "processing" | "waiting_payment" => Some(PaymentStatus::Pending),
        _ => None,
    }
}

/// Map a webhook event name to the payment status it implies.
///
/// Events that carry no payment meaning map to `None`; the webhook handler
/// still acknowledges them.
pub fn map_webhook_event(event: &str) -> Option<PaymentStatus> {
    match event {
        "order.paid" | "charge.paid" => Some(PaymentStatus::Paid),
        "order.payment_failed" | "charge.payment_failed" => Some(PaymentStatus::Failed),
        _ => None,
    }
}
