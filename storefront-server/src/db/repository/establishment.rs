//! Establishment repository

use shared::models::Establishment;
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(sqlx::FromRow)]
struct EstablishmentRow {
    id: i64,
    name: String,
    #[sqlx(rename = "type")]
    kind: String,
    description: String,
    icon: String,
    is_active: bool,
}

impl From<EstablishmentRow> for Establishment {
    fn from(row: EstablishmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            kind: row.kind,
            description: row.description,
            icon: row.icon,
            is_active: row.is_active,
        }
    }
}

#[derive(Clone)]
pub struct EstablishmentRepository {
    pool: SqlitePool,
}

impl EstablishmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Establishment>> {
        let rows: Vec<EstablishmentRow> =
            sqlx::query_as("SELECT * FROM establishments WHERE is_active = 1 ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Establishment>> {
        let row: Option<EstablishmentRow> =
            sqlx::query_as("SELECT * FROM establishments WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Into::into))
    }

    pub async fn exists(&self, id: i64) -> RepoResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM establishments WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    pub async fn count(&self) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM establishments")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
