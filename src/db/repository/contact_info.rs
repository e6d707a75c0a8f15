//! Contact Info Repository (Singleton)

use super::{RepoError, RepoResult};
use crate::db::models::{ContactInfo, ContactInfoChange};
use sqlx::SqlitePool;

const SINGLETON_ID: i64 = 1;

// Seed content for first startup
const DEFAULT_ADDRESS: &str = "123 Green Street, Shenzhen, China";
const DEFAULT_PHONE: &str = "+86 123 4567 8900";
const DEFAULT_EMAIL: &str = "info@jiyer.com";
const DEFAULT_WORKING_HOURS: &str = "Monday - Friday: 9:00 AM - 6:00 PM";
const DEFAULT_LINKEDIN: &str = "https://linkedin.com/company/jiyer";
const DEFAULT_TWITTER: &str = "https://twitter.com/jiyer_eco";
const DEFAULT_FACEBOOK: &str = "https://facebook.com/jiyercompany";

/// Get the singleton contact info
pub async fn get(pool: &SqlitePool) -> RepoResult<Option<ContactInfo>> {
    let info = sqlx::query_as::<_, ContactInfo>(
        "SELECT id, address, phone, email, working_hours, linkedin, twitter, facebook FROM contact_info WHERE id = ?",
    )
    .bind(SINGLETON_ID)
    .fetch_optional(pool)
    .await?;
    Ok(info)
}

/// Replace all fields of the singleton row
pub async fn replace(pool: &SqlitePool, data: &ContactInfoChange) -> RepoResult<ContactInfo> {
    let result = sqlx::query(
        "UPDATE contact_info SET address = ?, phone = ?, email = ?, working_hours = ?, linkedin = ?, twitter = ?, facebook = ? WHERE id = ?",
    )
    .bind(&data.address)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(&data.working_hours)
    .bind(&data.linkedin)
    .bind(&data.twitter)
    .bind(&data.facebook)
    .bind(SINGLETON_ID)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound("Contact info not found".into()));
    }

    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to reload contact info".into()))
}

/// Seed the singleton row when the table is empty (same guard as company_info)
pub async fn seed_if_empty(pool: &SqlitePool) -> RepoResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_info")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO contact_info (id, address, phone, email, working_hours, linkedin, twitter, facebook) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(SINGLETON_ID)
    .bind(DEFAULT_ADDRESS)
    .bind(DEFAULT_PHONE)
    .bind(DEFAULT_EMAIL)
    .bind(DEFAULT_WORKING_HOURS)
    .bind(DEFAULT_LINKEDIN)
    .bind(DEFAULT_TWITTER)
    .bind(DEFAULT_FACEBOOK)
    .execute(pool)
    .await?;

    tracing::info!("Seeded default contact info");
    Ok(())
}
