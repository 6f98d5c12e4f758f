//! Product repository
//!
//! Catalog queries: per-establishment listings with sort modes, featured
//! products, category listings and case-insensitive search over product
//! name, description and category name.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{Product, ProductCreate, ProductUpdate};
use shared::money;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

fn to_minor_or_invalid(amount: Decimal, field: &str) -> RepoResult<i64> {
    money::to_minor_units(amount)
        .ok_or_else(|| RepoError::Validation(format!("{field} is out of range")))
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: i64,
    original_price: Option<i64>,
    unit: String,
    stock: i64,
    image_url: Option<String>,
    is_active: bool,
    is_featured: bool,
    category_id: i64,
    establishment_id: i64,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: money::from_minor_units(row.price),
            original_price: row.original_price.map(money::from_minor_units),
            unit: row.unit,
            stock: row.stock,
            image_url: row.image_url,
            is_active: row.is_active,
            is_featured: row.is_featured,
            category_id: row.category_id,
            establishment_id: row.establishment_id,
            created_at: row.created_at,
        }
    }
}

/// Catalog sort modes, parsed from the `sortBy` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    BestSellers,
    Discount,
}

impl ProductSort {
    /// Unknown values fall back to the default ordering.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            Some("name_asc") => Self::NameAsc,
            Some("name_desc") => Self::NameDesc,
            Some("best_sellers") => Self::BestSellers,
            Some("discount") => Self::Discount,
            Some("newest") => Self::Newest,
            _ => Self::Newest,
        }
    }
}

#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Active products of an establishment in the requested order.
    ///
    /// Best-sellers uses a LEFT JOIN so products that never sold rank last
    /// with an effective count of zero instead of disappearing.
    pub async fn find_by_establishment(
        &self,
        establishment_id: i64,
        sort: ProductSort,
    ) -> RepoResult<Vec<Product>> {
        let sql = match sort {
            ProductSort::Newest => {
                "SELECT * FROM products \
                 WHERE establishment_id = ? AND is_active = 1 \
                 ORDER BY created_at DESC, id DESC"
            }
            ProductSort::PriceAsc => {
                "SELECT * FROM products \
                 WHERE establishment_id = ? AND is_active = 1 \
                 ORDER BY price ASC"
            }
            ProductSort::PriceDesc => {
                "SELECT * FROM products \
                 WHERE establishment_id = ? AND is_active = 1 \
                 ORDER BY price DESC"
            }
            ProductSort::NameAsc => {
                "SELECT * FROM products \
                 WHERE establishment_id = ? AND is_active = 1 \
                 ORDER BY name COLLATE NOCASE ASC"
            }
            ProductSort::NameDesc => {
                "SELECT * FROM products \
                 WHERE establishment_id = ? AND is_active = 1 \
                 ORDER BY name COLLATE NOCASE DESC"
            }
            ProductSort::BestSellers => {
                "SELECT p.* FROM products p \
                 LEFT JOIN product_sales ps ON ps.product_id = p.id \
                 WHERE p.establishment_id = ? AND p.is_active = 1 \
                 ORDER BY COALESCE(ps.quantity_sold, 0) DESC, p.name COLLATE NOCASE ASC"
            }
            ProductSort::Discount => {
                "SELECT * FROM products \
                 WHERE establishment_id = ? AND is_active = 1 \
                 ORDER BY CASE \
                     WHEN original_price IS NOT NULL AND original_price > price \
                     THEN (original_price - price) * 100.0 / original_price \
                     ELSE 0 END DESC"
            }
        };

        let rows: Vec<ProductRow> = sqlx::query_as(sql)
            .bind(establishment_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find_featured(&self, establishment_id: i64) -> RepoResult<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT * FROM products \
             WHERE establishment_id = ? AND is_active = 1 AND is_featured = 1 \
             ORDER BY id",
        )
        .bind(establishment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_category(&self, category_id: i64) -> RepoResult<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT * FROM products WHERE category_id = ? AND is_active = 1 ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as("SELECT * FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Case-insensitive search over product name, description and category
    /// name. `establishment_id = None` searches the whole catalog, capped
    /// at 20 results.
    pub async fn search(
        &self,
        establishment_id: Option<i64>,
        query: &str,
    ) -> RepoResult<Vec<Product>> {
        let pattern = format!("%{}%", query.to_lowercase());

        let sql = match establishment_id {
            Some(_) => {
                "SELECT p.* FROM products p \
                 JOIN categories c ON c.id = p.category_id \
                 WHERE p.establishment_id = ? AND p.is_active = 1 \
                   AND (LOWER(p.name) LIKE ? OR LOWER(p.description) LIKE ? OR LOWER(c.name) LIKE ?) \
                 ORDER BY p.name COLLATE NOCASE"
            }
            None => {
                "SELECT p.* FROM products p \
                 JOIN categories c ON c.id = p.category_id \
                 WHERE p.is_active = 1 \
                   AND (LOWER(p.name) LIKE ? OR LOWER(p.description) LIKE ? OR LOWER(c.name) LIKE ?) \
                 ORDER BY p.name COLLATE NOCASE \
                 LIMIT 20"
            }
        };

        let mut q = sqlx::query_as::<_, ProductRow>(sql);
        if let Some(id) = establishment_id {
            q = q.bind(id);
        }
        let rows = q
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let price_minor = to_minor_or_invalid(data.price, "price")?;
        let original_minor = data
            .original_price
            .map(|p| to_minor_or_invalid(p, "originalPrice"))
            .transpose()?;
        let row: ProductRow = sqlx::query_as(
            "INSERT INTO products \
             (name, description, price, original_price, unit, stock, image_url, \
              is_active, is_featured, category_id, establishment_id, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, 1, ?, ?, ?, ?) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(price_minor)
        .bind(original_minor)
        .bind(&data.unit)
        .bind(data.stock.unwrap_or(0))
        .bind(&data.image_url)
        .bind(data.is_featured.unwrap_or(false))
        .bind(data.category_id)
        .bind(data.establishment_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    /// Partial update; absent fields keep their current value.
    pub async fn update(&self, id: i64, data: ProductUpdate) -> RepoResult<Product> {
        let price_minor = data
            .price
            .map(|p| to_minor_or_invalid(p, "price"))
            .transpose()?;
        let original_minor = data
            .original_price
            .map(|p| to_minor_or_invalid(p, "originalPrice"))
            .transpose()?;
        let row: Option<ProductRow> = sqlx::query_as(
            "UPDATE products SET \
                 name = COALESCE(?, name), \
                 description = COALESCE(?, description), \
                 price = COALESCE(?, price), \
                 original_price = COALESCE(?, original_price), \
                 unit = COALESCE(?, unit), \
                 stock = COALESCE(?, stock), \
                 image_url = COALESCE(?, image_url), \
                 is_active = COALESCE(?, is_active), \
                 is_featured = COALESCE(?, is_featured), \
                 category_id = COALESCE(?, category_id) \
             WHERE id = ? \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(price_minor)
        .bind(original_minor)
        .bind(&data.unit)
        .bind(data.stock)
        .bind(&data.image_url)
        .bind(data.is_active)
        .bind(data.is_featured)
        .bind(data.category_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Into::into)
            .ok_or_else(|| RepoError::NotFound(format!("product {id} not found")))
    }

    pub async fn count_by_establishment(&self, establishment_id: i64) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM products WHERE establishment_id = ? AND is_active = 1",
        )
        .bind(establishment_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
