//! Payment provider integration
//!
//! [`PaymentProcessor`] is the seam between order flows and the external
//! payment vendor; the HTTP implementation talks to the real provider and
//! tests substitute a mock.

pub mod http;
pub mod processor;
pub mod status;

pub use http::HttpPaymentProcessor;
pub use processor::{
    CardDetails, PaymentIntent, PaymentProcessor, ProviderAddress, ProviderCustomer,
    ProviderError, ProviderLineItem, ProviderOrderRequest, ProviderOrderResponse, ProviderResult,
};
