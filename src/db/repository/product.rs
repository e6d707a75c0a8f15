//! Product Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, category, name, code, description, created_at, updated_at";

/// Find all products, ordered by (category, name)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {COLUMNS} FROM products ORDER BY category, name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(products)
}

/// Find product by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let product =
        sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM products WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(product)
}

/// Create a new product row
///
/// A duplicate `code` surfaces as [`RepoError::Duplicate`] and writes nothing.
pub async fn create(pool: &SqlitePool, data: &ProductCreate, now: i64) -> RepoResult<Product> {
    let result = sqlx::query(
        "INSERT INTO products (category, name, code, description, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.category)
    .bind(&data.name)
    .bind(&data.code)
    .bind(&data.description)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| remap_duplicate_code(e, &data.code))?;

    let id = result.last_insert_rowid();
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to reload created product".into()))
}

/// Update the scalar fields of a product, touching `updated_at`
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &ProductUpdate,
    now: i64,
) -> RepoResult<Product> {
    let result = sqlx::query(
        "UPDATE products SET category = ?, name = ?, code = ?, description = ?, updated_at = ? WHERE id = ?",
    )
    .bind(&data.category)
    .bind(&data.name)
    .bind(&data.code)
    .bind(&data.description)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| remap_duplicate_code(e, &data.code))?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {} not found", id)));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
}

/// Hard delete a product (image rows go via FK cascade)
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {} not found", id)));
    }
    Ok(())
}

/// Distinct categories, ascending
pub async fn distinct_categories(pool: &SqlitePool) -> RepoResult<Vec<String>> {
    let categories: Vec<String> =
        sqlx::query_scalar("SELECT DISTINCT category FROM products ORDER BY category")
            .fetch_all(pool)
            .await?;
    Ok(categories)
}

fn remap_duplicate_code(err: sqlx::Error, code: &str) -> RepoError {
    match RepoError::from(err) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Product code '{}' already exists", code))
        }
        other => other,
    }
}
