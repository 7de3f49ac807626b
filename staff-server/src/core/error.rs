use thiserror::Error;

/// 启动/运行期错误
///
/// 只有这些错误会让进程退出，请求级错误走 [`shared::AppError`]。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库连接失败: {0}")]
    Database(String),

    #[error("端口绑定失败 {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务错误: {0}")]
    Serve(#[from] std::io::Error),
}

/// 服务器级 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
