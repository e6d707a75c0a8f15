//! Product Model

use serde::{Deserialize, Serialize};

/// Product row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub category: String,
    pub name: String,
    /// Unique product code (uniqueness enforced by the store)
    pub code: String,
    pub description: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// New product payload (scalar fields; images travel separately)
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    pub category: String,
    pub name: String,
    pub code: String,
    pub description: String,
}

/// Product update payload - full replace of the scalar fields
#[derive(Debug, Clone, Deserialize)]
pub struct ProductUpdate {
    pub category: String,
    pub name: String,
    pub code: String,
    pub description: String,
}

/// Product as exposed on the public API: scalar fields plus the resolved
/// image sequence, primary image first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductView {
    pub id: i64,
    pub category: String,
    pub name: String,
    pub code: String,
    pub description: String,
    pub images: Vec<String>,
}
