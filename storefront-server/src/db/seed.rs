//! Development seed data
//!
//! Populates an empty database with a few establishments, categories,
//! products, offers and a default admin account. Runs only when the
//! establishments table is empty, so restarts never duplicate data.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::utils::crypto::hash_password;
use crate::utils::AppError;

pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM establishments")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if count > 0 {
        tracing::debug!("seed skipped, database already populated");
        return Ok(());
    }

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let now = Utc::now();

    let establishments = [
        ("Mercado Central", "supermarket", "Everyday groceries", "🛒"),
        ("Casa de Carnes Silva", "butcher", "Fresh cuts daily", "🥩"),
        ("Padaria do Bairro", "bakery", "Breads and pastries", "🥖"),
    ];
    for (name, kind, description, icon) in establishments {
        sqlx::query(
            "INSERT INTO establishments (name, type, description, icon, is_active) \
             VALUES (?, ?, ?, ?, 1)",
        )
        .bind(name)
        .bind(kind)
        .bind(description)
        .bind(icon)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    }

    let categories = [
        ("Hortifruti", "🥬", "#4caf50", 1),
        ("Bebidas", "🥤", "#2196f3", 1),
        ("Carnes Bovinas", "🥩", "#b71c1c", 2),
        ("Pães", "🍞", "#ff9800", 3),
    ];
    for (name, icon, color, establishment_id) in categories {
        sqlx::query(
            "INSERT INTO categories (name, icon, color, establishment_id) VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(icon)
        .bind(color)
        .bind(establishment_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    }

    // (name, description, price cents, original cents, unit, stock, featured, category, establishment)
    let products: [(&str, &str, i64, Option<i64>, &str, i64, bool, i64, i64); 6] = [
        ("Banana Prata", "Fresh bananas by the kilo", 599, None, "kg", 120, true, 1, 1),
        ("Tomate Italiano", "Ripe plum tomatoes", 849, Some(999), "kg", 80, false, 1, 1),
        ("Suco de Laranja 1L", "Cold-pressed orange juice", 1290, None, "unit", 40, true, 2, 1),
        ("Picanha", "Prime cut, vacuum packed", 6990, Some(7990), "kg", 25, true, 3, 2),
        ("Pão Francês", "Baked every morning", 1590, None, "kg", 60, true, 4, 3),
        ("Croissant", "Butter croissant", 750, None, "unit", 30, false, 4, 3),
    ];
    for (name, description, price, original, unit, stock, featured, category_id, establishment_id) in
        products
    {
        sqlx::query(
            "INSERT INTO products \
             (name, description, price, original_price, unit, stock, image_url, \
              is_active, is_featured, category_id, establishment_id, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, NULL, 1, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(original)
        .bind(unit)
        .bind(stock)
        .bind(featured)
        .bind(category_id)
        .bind(establishment_id)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    }

    sqlx::query(
        "INSERT INTO offers \
         (title, description, discount_percentage, product_id, establishment_id, \
          is_active, valid_until, created_at) \
         VALUES (?, ?, ?, ?, ?, 1, NULL, ?)",
    )
    .bind("Tomate em oferta")
    .bind("15% off on plum tomatoes this week")
    .bind(15)
    .bind(2i64)
    .bind(1i64)
    .bind(now)
    .execute(&mut *tx)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    sqlx::query(
        "INSERT INTO admin_users (username, email, password_hash, is_active, created_at) \
         VALUES (?, ?, ?, 1, ?)",
    )
    .bind("admin")
    .bind("admin@example.com")
    .bind(hash_password("admin123"))
    .bind(now)
    .execute(&mut *tx)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    tracing::info!("seed data inserted");
    Ok(())
}
