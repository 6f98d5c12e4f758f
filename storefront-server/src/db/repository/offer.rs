//! Offer repository

use chrono::{DateTime, Utc};
use shared::models::{Offer, OfferCreate};
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(sqlx::FromRow)]
struct OfferRow {
    id: i64,
    title: String,
    description: String,
    discount_percentage: i32,
    product_id: i64,
    establishment_id: i64,
    is_active: bool,
    valid_until: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<OfferRow> for Offer {
    fn from(row: OfferRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            discount_percentage: row.discount_percentage,
            product_id: row.product_id,
            establishment_id: row.establishment_id,
            is_active: row.is_active,
            valid_until: row.valid_until,
            created_at: row.created_at,
        }
    }
}

#[derive(Clone)]
pub struct OfferRepository {
    pool: SqlitePool,
}

impl OfferRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_establishment(&self, establishment_id: i64) -> RepoResult<Vec<Offer>> {
        let rows: Vec<OfferRow> = sqlx::query_as(
            "SELECT * FROM offers WHERE establishment_id = ? ORDER BY created_at DESC",
        )
        .bind(establishment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Active offers that have not expired yet.
    pub async fn find_active(&self, establishment_id: i64) -> RepoResult<Vec<Offer>> {
        let rows: Vec<OfferRow> = sqlx::query_as(
            "SELECT * FROM offers \
             WHERE establishment_id = ? AND is_active = 1 \
               AND (valid_until IS NULL OR valid_until > ?) \
             ORDER BY created_at DESC",
        )
        .bind(establishment_id)
        .bind(Utc::now())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, data: OfferCreate) -> RepoResult<Offer> {
        let row: OfferRow = sqlx::query_as(
            "INSERT INTO offers \
             (title, description, discount_percentage, product_id, establishment_id, \
              is_active, valid_until, created_at) \
             VALUES (?, ?, ?, ?, ?, 1, ?, ?) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.discount_percentage)
        .bind(data.product_id)
        .bind(data.establishment_id)
        .bind(data.valid_until)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }
}
