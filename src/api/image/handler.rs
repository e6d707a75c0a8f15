//! Image Serving Handler
//!
//! Serves stored product images from the upload directory.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/image/{filename} - 上传图片访问
pub async fn get(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    let path = state.images.resolve(&filename)?;
    let data = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::not_found(format!("Image {} not found", filename)))?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.to_string())], data).into_response())
}
