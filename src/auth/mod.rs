//! 认证模块 - 管理后台的共享密码会话门禁
//!
//! - [`SessionStore`] - 内存会话存储 (令牌 → 会话)
//! - [`require_admin`] - 管理端点会话校验中间件

pub mod middleware;
pub mod session;

pub use middleware::require_admin;
pub use session::{AdminSession, SessionStore};
