//! Content Service
//!
//! Read/update operations over the site's singleton company and contact
//! records. Admin forms deliver every field as a string; the only coercion
//! performed here is string→integer for `founded`/`employees`.

use sqlx::SqlitePool;

use crate::db::models::{
    CompanyInfo, CompanyInfoChange, CompanyInfoForm, ContactInfo, ContactInfoChange,
    ContactInfoForm,
};
use crate::db::repository;
use crate::utils::{AppError, AppResult};

/// Get the company singleton; NotFound only if the seed never ran
pub async fn get_company_info(pool: &SqlitePool) -> AppResult<CompanyInfo> {
    Ok(repository::company_info::get(pool)
        .await?
        .ok_or_else(|| AppError::not_found("Company info not found"))?)
}

/// Full replace of all seven company fields
pub async fn update_company_info(
    pool: &SqlitePool,
    form: CompanyInfoForm,
) -> AppResult<CompanyInfo> {
    let founded = parse_int_field(&form.founded, "founded")?;
    let employees = parse_int_field(&form.employees, "employees")?;

    let change = CompanyInfoChange {
        name: form.name,
        description: form.description,
        mission: form.mission,
        vision: form.vision,
        founded,
        employees,
        headquarters: form.headquarters,
    };
    Ok(repository::company_info::replace(pool, &change).await?)
}

/// Get the contact singleton; NotFound only if the seed never ran
pub async fn get_contact_info(pool: &SqlitePool) -> AppResult<ContactInfo> {
    Ok(repository::contact_info::get(pool)
        .await?
        .ok_or_else(|| AppError::not_found("Contact info not found"))?)
}

/// Full replace of the contact fields; empty social links become NULL
pub async fn update_contact_info(
    pool: &SqlitePool,
    form: ContactInfoForm,
) -> AppResult<ContactInfo> {
    let change = ContactInfoChange {
        address: form.address,
        phone: form.phone,
        email: form.email,
        working_hours: form.working_hours,
        linkedin: normalize_optional(form.linkedin),
        twitter: normalize_optional(form.twitter),
        facebook: normalize_optional(form.facebook),
    };
    Ok(repository::contact_info::replace(pool, &change).await?)
}

fn parse_int_field(raw: &str, field: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(format!("Field '{}' must be an integer, got '{}'", field, raw)))
}

/// Empty form fields mean "no link"
fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
