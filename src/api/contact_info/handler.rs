//! Contact Info API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::ContactInfoView;
use crate::services::content;
use crate::utils::AppResult;

/// GET /api/contact - 联系方式 (social_media 嵌套对象)
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<ContactInfoView>> {
    let info = content::get_contact_info(&state.pool).await?;
    Ok(Json(info.into()))
}
