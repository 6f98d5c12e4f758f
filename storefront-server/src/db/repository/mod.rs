//! Repository module
//!
//! One repository per aggregate, each owning the SQL for its tables.
//! Monetary columns are stored as INTEGER minor units and converted to
//! [`rust_decimal::Decimal`] at this boundary.

pub mod admin;
pub mod category;
pub mod establishment;
pub mod offer;
pub mod order;
pub mod product;
pub mod sales;

pub use admin::AdminRepository;
pub use category::CategoryRepository;
pub use establishment::EstablishmentRepository;
pub use offer::OfferRepository;
pub use order::OrderRepository;
pub use product::{ProductRepository, ProductSort};
pub use sales::SalesRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("record not found".to_string()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
