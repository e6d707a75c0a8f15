//! JIYER Site Server - 营销站点后端
//!
//! # 架构概述
//!
//! 本模块是站点后端的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (公司/联系单例 + 产品目录)
//! - **目录服务** (`services/catalog`): 产品视图装配，主图排序在前
//! - **认证** (`auth`): 共享密码 + 会话令牌门禁
//! - **HTTP API** (`api`): 公共读取接口与管理后台变更接口
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # 会话存储、门禁中间件
//! ├── services/      # 目录装配、内容服务、图片存储
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repository)
//! └── utils/         # 错误、日志、时间工具
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{AdminSession, SessionStore};
pub use crate::core::{Config, Server, ServerState, build_app, build_router};
pub use services::{CatalogService, ImageStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
      _ _____  _______ ____
     | |_ _\ \/ / ____|  _ \
  _  | || | \  /|  _| | |_) |
 | |_| || | /  \| |___|  _ <
  \___/|___/_/\_\_____|_| \_\
    "#
    );
}
