//! 认证中间件
//!
//! 为管理接口提供会话校验的 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::SessionStore;
use crate::core::ServerState;
use crate::security_log;

/// Admin mutation endpoints guarded by the session check
const GUARDED_PATHS: &[&str] = &[
    "/update_company",
    "/update_contact",
    "/add_product",
    "/update_product",
    "/delete_product",
    "/delete_product_image",
    "/set_primary_image",
];

/// 管理会话中间件 - 要求已登录
///
/// 从 `Authorization: Bearer <token>` 头提取会话令牌并在会话存储中校验。
/// 校验成功后将 [`AdminSession`](crate::auth::AdminSession) 注入请求扩展。
///
/// # 跳过校验的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 所有非管理端点 (公共读取 API、登录、登出)
///
/// # 错误处理
///
/// 缺失或未知令牌返回 401，请求不会到达 handler，存储层不被访问。
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let path = req.uri().path();
    if !GUARDED_PATHS.contains(&path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header.and_then(SessionStore::extract_from_header) {
        Some(t) => t,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    match state.sessions.validate(token) {
        Some(session) => {
            req.extensions_mut().insert(session);
            Ok(next.run(req).await)
        }
        None => {
            security_log!("WARN", "auth_failed", uri = format!("{:?}", req.uri()));
            Err(AppError::unauthorized())
        }
    }
}
