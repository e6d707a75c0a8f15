//! Category API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// GET /api/categories - 所有产品分类 (去重，升序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<CategoriesResponse>> {
    let categories = state.catalog.list_categories().await?;
    Ok(Json(CategoriesResponse { categories }))
}
