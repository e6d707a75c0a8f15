//! Product Image Model

use serde::{Deserialize, Serialize};

/// Product image row
///
/// `image_path` is the stored filename relative to the upload directory
/// (UUID-derived); `original_name` keeps the uploaded filename as metadata.
/// At most one image per product is primary at any time.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductImage {
    pub id: i64,
    pub product_id: i64,
    pub image_path: String,
    pub original_name: String,
    pub is_primary: bool,
    pub created_at: i64,
}
