/// 服务器配置 - 员工记录服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | rocksdb://data/employee.db | SurrealDB 连接串 (`mem://`, `rocksdb://path`) |
/// | DB_NAMESPACE | staff | SurrealDB namespace |
/// | DB_NAME | employeeDB | SurrealDB database |
/// | HTTP_PORT (或 PORT) | 3000 | HTTP 服务端口 |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
/// | ENVIRONMENT | development | 运行环境 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=mem:// HTTP_PORT=8080 cargo run -p staff-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SurrealDB 连接串
    pub database_url: String,
    /// SurrealDB namespace
    pub db_namespace: String,
    /// SurrealDB database
    pub db_name: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 默认日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

/// 默认数据库连接串
pub const DEFAULT_DATABASE_URL: &str = "rocksdb://data/employee.db";

/// 默认 HTTP 端口
pub const DEFAULT_HTTP_PORT: u16 = 3000;

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "staff".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "employeeDB".into()),
            http_port: std::env::var("HTTP_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config.http_port = http_port;
        config
    }

    /// 内存数据库配置，测试用
    pub fn in_memory() -> Self {
        Self::with_overrides("mem://", 0)
    }

    /// 关闭超时
    pub fn shutdown_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.shutdown_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
