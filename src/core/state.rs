use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::SessionStore;
use crate::core::Config;
use crate::db::DbService;
use crate::services::{CatalogService, ImageStore};

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是站点后端的核心数据结构。使用 Arc/池句柄实现浅拷贝，
/// 每个请求克隆的成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | sessions | Arc<SessionStore> | 管理会话存储 |
/// | images | ImageStore | 上传图片文件存储 |
/// | catalog | CatalogService | 产品目录服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// 管理会话存储
    pub sessions: Arc<SessionStore>,
    /// 上传图片文件存储
    pub images: ImageStore,
    /// 产品目录服务
    pub catalog: CatalogService,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(
        config: Config,
        pool: SqlitePool,
        sessions: Arc<SessionStore>,
        images: ImageStore,
        catalog: CatalogService,
    ) -> Self {
        Self {
            config,
            pool,
            sessions,
            images,
            catalog,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/jiyer.db，迁移 + 单例种子)
    /// 3. 图片存储、目录服务、会话存储
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("jiyer.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");
        let pool = db_service.pool;

        let images = ImageStore::new(config.uploads_dir());
        let catalog = CatalogService::new(pool.clone(), images.clone());
        let sessions = Arc::new(SessionStore::new());

        Self::new(config.clone(), pool, sessions, images, catalog)
    }
}
