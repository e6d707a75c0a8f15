//! Authentication Handlers
//!
//! Handles admin login and logout against the shared-secret gate

use std::time::Duration;

use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::SessionStore;
use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, ok};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /login - 管理后台登录
///
/// 密码正确时签发会话令牌；后续管理请求通过
/// `Authorization: Bearer <token>` 携带。
pub async fn login(
    State(state): State<ServerState>,
    Form(req): Form<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    if req.password != state.config.admin_password {
        tracing::warn!("Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let session = state.sessions.create();
    tracing::info!("Admin logged in");

    Ok(Json(LoginResponse {
        token: session.token,
    }))
}

/// POST /logout - 登出，撤销会话令牌
///
/// 无论令牌是否有效都返回成功。
pub async fn logout(
    State(state): State<ServerState>,
    headers: http::HeaderMap,
) -> Json<AppResponse<()>> {
    let token = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(SessionStore::extract_from_header);

    if let Some(token) = token {
        if state.sessions.revoke(token) {
            tracing::info!("Admin logged out");
        }
    }

    ok(())
}
