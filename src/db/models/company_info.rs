//! Company Info Model (Singleton)

use serde::{Deserialize, Serialize};

/// Company information entity (singleton, id fixed at 1)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompanyInfo {
    #[serde(skip_serializing, default)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub mission: String,
    pub vision: String,
    pub founded: i64,
    pub employees: i64,
    pub headquarters: String,
}

/// Company info admin form payload
///
/// `founded`/`employees` arrive as raw form strings and are coerced to
/// integers by the content service; anything non-numeric is a validation
/// error and leaves the stored row untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyInfoForm {
    pub name: String,
    pub description: String,
    pub mission: String,
    pub vision: String,
    pub founded: String,
    pub employees: String,
    pub headquarters: String,
}

/// Validated replacement values for the singleton row
#[derive(Debug, Clone)]
pub struct CompanyInfoChange {
    pub name: String,
    pub description: String,
    pub mission: String,
    pub vision: String,
    pub founded: i64,
    pub employees: i64,
    pub headquarters: String,
}
