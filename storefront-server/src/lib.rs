//! Storefront server
//!
//! Multi-tenant storefront backend: catalog, orders, payment provider
//! integration and sales aggregates over SQLite.

pub mod api;
pub mod core;
pub mod db;
pub mod payments;
pub mod services;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
