//! Server configuration
//!
//! All settings come from environment variables with sensible defaults.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | HTTP_PORT | 3000 | HTTP service port |
//! | DATABASE_PATH | storefront.db | SQLite database file |
//! | PROVIDER_BASE_URL | http://localhost:4000 | Payment provider API |
//! | PROVIDER_API_KEY | (empty) | Payment provider secret key |
//! | PROVIDER_TIMEOUT_MS | 10000 | Provider request timeout |
//! | DEFAULT_DELIVERY_FEE | 5.00 | Delivery fee when the order omits one |
//! | PAYMENT_CURRENCY | brl | ISO currency code for intents |
//! | SEED_ON_START | true | Insert dev seed data into an empty database |
//! | LOG_DIR | (unset) | Directory for daily rolling log files |
//! | ENVIRONMENT | development | development / staging / production |

use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_path: String,
    pub provider_base_url: String,
    pub provider_api_key: String,
    pub provider_timeout_ms: u64,
    pub default_delivery_fee: Decimal,
    pub payment_currency: String,
    pub seed_on_start: bool,
    pub log_dir: Option<String>,
    pub environment: String,
}

impl Config {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "storefront.db".into()),
            provider_base_url: std::env::var("PROVIDER_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:4000".into()),
            provider_api_key: std::env::var("PROVIDER_API_KEY").unwrap_or_default(),
            provider_timeout_ms: std::env::var("PROVIDER_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            default_delivery_fee: std::env::var("DEFAULT_DELIVERY_FEE")
                .ok()
                .and_then(|v| Decimal::from_str(&v).ok())
                .unwrap_or_else(|| Decimal::new(500, 2)),
            payment_currency: std::env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "brl".into()),
            seed_on_start: std::env::var("SEED_ON_START")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
