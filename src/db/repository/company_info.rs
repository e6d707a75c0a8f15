//! Company Info Repository (Singleton)

use super::{RepoError, RepoResult};
use crate::db::models::{CompanyInfo, CompanyInfoChange};
use sqlx::SqlitePool;

const SINGLETON_ID: i64 = 1;

// Seed content for first startup
const DEFAULT_NAME: &str = "JIYER";
const DEFAULT_DESCRIPTION: &str = "JIYER is a leading environmental technology company dedicated to creating sustainable solutions for a greener future. We specialize in innovative eco-friendly products and services that help businesses and individuals reduce their environmental impact.";
const DEFAULT_MISSION: &str = "Our mission is to accelerate the world's transition to sustainable energy and environmental practices through cutting-edge technology and innovative solutions.";
const DEFAULT_VISION: &str = "To become the global leader in environmental technology, making sustainable living accessible to everyone.";
const DEFAULT_FOUNDED: i64 = 2020;
const DEFAULT_EMPLOYEES: i64 = 150;
const DEFAULT_HEADQUARTERS: &str = "Shenzhen, China";

/// Get the singleton company info
pub async fn get(pool: &SqlitePool) -> RepoResult<Option<CompanyInfo>> {
    let info = sqlx::query_as::<_, CompanyInfo>(
        "SELECT id, name, description, mission, vision, founded, employees, headquarters FROM company_info WHERE id = ?",
    )
    .bind(SINGLETON_ID)
    .fetch_optional(pool)
    .await?;
    Ok(info)
}

/// Replace all fields of the singleton row
pub async fn replace(pool: &SqlitePool, data: &CompanyInfoChange) -> RepoResult<CompanyInfo> {
    let result = sqlx::query(
        "UPDATE company_info SET name = ?, description = ?, mission = ?, vision = ?, founded = ?, employees = ?, headquarters = ? WHERE id = ?",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.mission)
    .bind(&data.vision)
    .bind(data.founded)
    .bind(data.employees)
    .bind(&data.headquarters)
    .bind(SINGLETON_ID)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound("Company info not found".into()));
    }

    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to reload company info".into()))
}

/// Seed the singleton row when the table is empty.
///
/// Count-then-insert; the fixed primary key makes a concurrent double-seed
/// fail on the second insert instead of producing two rows.
pub async fn seed_if_empty(pool: &SqlitePool) -> RepoResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM company_info")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO company_info (id, name, description, mission, vision, founded, employees, headquarters) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(SINGLETON_ID)
    .bind(DEFAULT_NAME)
    .bind(DEFAULT_DESCRIPTION)
    .bind(DEFAULT_MISSION)
    .bind(DEFAULT_VISION)
    .bind(DEFAULT_FOUNDED)
    .bind(DEFAULT_EMPLOYEES)
    .bind(DEFAULT_HEADQUARTERS)
    .execute(pool)
    .await?;

    tracing::info!("Seeded default company info");
    Ok(())
}
