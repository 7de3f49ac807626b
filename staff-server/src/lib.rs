//! Staff Server - 员工记录 REST 服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SurrealDB 文档存储
//! - **HTTP API** (`api`): `/api/employees` 资源
//! - **核心** (`core`): 配置、状态、服务器、中间件
//! - **工具** (`utils`): 日志、输入校验
//!
//! # 模块结构
//!
//! ```text
//! staff-server/src/
//! ├── core/          # 配置、状态、错误、中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repository)
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState, build_app};
pub use db::DbService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 加载 `.env` 并按配置初始化日志
///
/// `.env` 不存在不算错误。
pub fn setup_environment() -> anyhow::Result<Config> {
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   _____ __        ________
  / ___// /_____ _/ __/ __/
  \__ \/ __/ __ `/ /_/ /_
 ___/ / /_/ /_/ / __/ __/
/____/\__/\__,_/_/ /_/
    "#
    );
}
