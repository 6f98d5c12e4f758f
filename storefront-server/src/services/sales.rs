//! Sales aggregation
//!
//! Maintains the denormalized per-product sales counters. The upsert is a
//! single statement so concurrent order creation cannot interleave a
//! read-modify-write; SQLite serializes the increments.

use rust_decimal::Decimal;
use shared::money;
use sqlx::SqliteConnection;

use crate::db::repository::{RepoError, RepoResult};

/// Record a sale of `quantity` units at `unit_price` against the product's
/// running totals, inside the caller's transaction.
///
/// The establishment id is resolved from the products table; a sale against
/// an unknown product id is silently a no-op.
pub async fn record_sale(
    conn: &mut SqliteConnection,
    product_id: i64,
    quantity: i32,
    unit_price: Decimal,
) -> RepoResult<()> {
    let unit_minor = money::to_minor_units(unit_price)
        .ok_or_else(|| RepoError::Validation("unit price is out of range".to_string()))?;
    let revenue = unit_minor
        .checked_mul(i64::from(quantity))
        .ok_or_else(|| RepoError::Validation("sale revenue is out of range".to_string()))?;

    sqlx::query(
        "INSERT INTO product_sales \
         (product_id, establishment_id, quantity_sold, total_revenue, last_sale_date) \
         SELECT id, establishment_id, ?, ?, ? FROM products WHERE id = ? \
         ON CONFLICT(product_id) DO UPDATE SET \
             quantity_sold = quantity_sold + excluded.quantity_sold, \
             total_revenue = total_revenue + excluded.total_revenue, \
             last_sale_date = excluded.last_sale_date",
    )
    .bind(i64::from(quantity))
    .bind(revenue)
    .bind(chrono::Utc::now())
    .bind(product_id)
    .execute(conn)
    .await?;
    Ok(())
}
