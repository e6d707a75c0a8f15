//! Company Info API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::CompanyInfo;
use crate::services::content;
use crate::utils::AppResult;

/// GET /api/company-info - 公司信息
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<CompanyInfo>> {
    let info = content::get_company_info(&state.pool).await?;
    Ok(Json(info))
}
