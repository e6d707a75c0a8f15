//! Product Image Repository

use super::RepoResult;
use crate::db::models::ProductImage;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, product_id, image_path, original_name, is_primary, created_at";

/// All image rows, grouped by product in insertion order
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ProductImage>> {
    let rows = sqlx::query_as::<_, ProductImage>(&format!(
        "SELECT {COLUMNS} FROM product_images ORDER BY product_id, id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Image rows for one product, insertion order
pub async fn find_by_product(pool: &SqlitePool, product_id: i64) -> RepoResult<Vec<ProductImage>> {
    let rows = sqlx::query_as::<_, ProductImage>(&format!(
        "SELECT {COLUMNS} FROM product_images WHERE product_id = ? ORDER BY id"
    ))
    .bind(product_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Insert an image row
pub async fn insert(
    pool: &SqlitePool,
    product_id: i64,
    image_path: &str,
    original_name: &str,
    is_primary: bool,
    now: i64,
) -> RepoResult<i64> {
    let result = sqlx::query(
        "INSERT INTO product_images (product_id, image_path, original_name, is_primary, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(product_id)
    .bind(image_path)
    .bind(original_name)
    .bind(is_primary)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Delete the image row matching (product_id, image_path).
/// Returns whether a row was removed.
pub async fn delete_by_path(
    pool: &SqlitePool,
    product_id: i64,
    image_path: &str,
) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM product_images WHERE product_id = ? AND image_path = ?")
        .bind(product_id)
        .bind(image_path)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Mark the image matching `image_path` as the product's primary image.
///
/// Single conditional statement: every row of the product gets
/// `is_primary = (image_path = ?)`, so the old primary is cleared and the
/// new one set atomically. A path that belongs to no row of the product
/// leaves the product with zero primary images.
pub async fn set_primary(pool: &SqlitePool, product_id: i64, image_path: &str) -> RepoResult<()> {
    sqlx::query("UPDATE product_images SET is_primary = (image_path = ?) WHERE product_id = ?")
        .bind(image_path)
        .bind(product_id)
        .execute(pool)
        .await?;
    Ok(())
}
