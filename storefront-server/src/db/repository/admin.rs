//! Admin user repository

use chrono::{DateTime, Utc};
use shared::models::AdminUser;
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(sqlx::FromRow)]
struct AdminUserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<AdminUserRow> for AdminUser {
    fn from(row: AdminUserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[derive(Clone)]
pub struct AdminRepository {
    pool: SqlitePool,
}

impl AdminRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<AdminUser>> {
        let row: Option<AdminUserRow> =
            sqlx::query_as("SELECT * FROM admin_users WHERE username = ? AND is_active = 1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Into::into))
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<AdminUser>> {
        let row: Option<AdminUserRow> =
            sqlx::query_as("SELECT * FROM admin_users WHERE email = ? AND is_active = 1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Into::into))
    }

    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> RepoResult<AdminUser> {
        let row: AdminUserRow = sqlx::query_as(
            "INSERT INTO admin_users (username, email, password_hash, is_active, created_at) \
             VALUES (?, ?, ?, 1, ?) \
             RETURNING *",
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }
}
