use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 持有所有请求共享的句柄
///
/// API 本身无状态，这里只放配置和数据库连接。
/// `Surreal<Any>` 内部是 Arc，Clone 成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Any> | 文档数据库连接 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 文档数据库 (SurrealDB)
    pub db: Surreal<Any>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 代替
    pub fn new(config: Config, db: Surreal<Any>) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 连接数据库失败直接返回错误，由调用方终止进程。
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_service = DbService::connect(
            &config.database_url,
            &config.db_namespace,
            &config.db_name,
        )
        .await?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> Surreal<Any> {
        self.db.clone()
    }
}
