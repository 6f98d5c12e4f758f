//! Product sales repository
//!
//! Read side of the denormalized sales aggregates. Writes happen in the
//! sales aggregator as part of the order creation transaction.

use chrono::{DateTime, Utc};
use shared::models::ProductSales;
use shared::money;
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(sqlx::FromRow)]
struct ProductSalesRow {
    id: i64,
    product_id: i64,
    establishment_id: i64,
    quantity_sold: i64,
    total_revenue: i64,
    last_sale_date: DateTime<Utc>,
}

impl From<ProductSalesRow> for ProductSales {
    fn from(row: ProductSalesRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            establishment_id: row.establishment_id,
            quantity_sold: row.quantity_sold,
            total_revenue: money::from_minor_units(row.total_revenue),
            last_sale_date: row.last_sale_date,
        }
    }
}

#[derive(Clone)]
pub struct SalesRepository {
    pool: SqlitePool,
}

impl SalesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_product(&self, product_id: i64) -> RepoResult<Option<ProductSales>> {
        let row: Option<ProductSalesRow> =
            sqlx::query_as("SELECT * FROM product_sales WHERE product_id = ?")
                .bind(product_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Into::into))
    }

    pub async fn find_by_establishment(
        &self,
        establishment_id: i64,
    ) -> RepoResult<Vec<ProductSales>> {
        let rows: Vec<ProductSalesRow> = sqlx::query_as(
            "SELECT * FROM product_sales WHERE establishment_id = ? \
             ORDER BY quantity_sold DESC",
        )
        .bind(establishment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
