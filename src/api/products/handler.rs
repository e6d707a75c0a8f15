//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::ProductView;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductView>,
}

/// GET /api/products - 获取所有产品 (主图在前)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ProductsResponse>> {
    let products = state.catalog.list_products().await?;
    Ok(Json(ProductsResponse { products }))
}

/// GET /api/products/{id} - 获取单个产品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductView>> {
    let product = state.catalog.get_product(id).await?;
    Ok(Json(product))
}
