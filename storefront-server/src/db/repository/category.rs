//! Category repository

use shared::models::{Category, CategoryWithProducts};
use sqlx::SqlitePool;

use super::product::ProductRepository;
use super::RepoResult;

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    icon: String,
    color: String,
    establishment_id: i64,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            icon: row.icon,
            color: row.color,
            establishment_id: row.establishment_id,
        }
    }
}

#[derive(Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_establishment(&self, establishment_id: i64) -> RepoResult<Vec<Category>> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT * FROM categories WHERE establishment_id = ? ORDER BY id")
                .bind(establishment_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>> {
        let row: Option<CategoryRow> = sqlx::query_as("SELECT * FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Categories of an establishment, each with its active products.
    pub async fn find_with_products(
        &self,
        establishment_id: i64,
    ) -> RepoResult<Vec<CategoryWithProducts>> {
        let categories = self.find_by_establishment(establishment_id).await?;
        let products = ProductRepository::new(self.pool.clone());

        let mut result = Vec::with_capacity(categories.len());
        for category in categories {
            let items = products.find_by_category(category.id).await?;
            result.push(CategoryWithProducts {
                category,
                products: items,
            });
        }
        Ok(result)
    }
}
