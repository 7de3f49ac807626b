//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::core::middleware::logging_middleware;
use crate::core::{Config, Result, ServerError, ServerState};

/// Build the Axum router with state and middleware applied
pub fn build_app(state: ServerState) -> Router {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::employees::router())
        .fallback(crate::api::fallback)
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(logging_middleware))
}

/// HTTP Server
///
/// 状态由调用方先行初始化，数据库打不开时进程在这里之前就已退出。
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };
        self.run_until(shutdown).await
    }

    /// Serve until `shutdown_signal` resolves, then drain in-flight requests
    pub async fn run_until<F>(&self, shutdown_signal: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = build_app(self.state.clone());
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("🚀 Staff server starting on {}", addr);

        let handle = axum_server::Handle::new();

        // Handle shutdown signal
        let handle_clone = handle.clone();
        let timeout = self.config.shutdown_timeout();
        tokio::spawn(async move {
            shutdown_signal.await;
            handle_clone.graceful_shutdown(Some(timeout));
        });

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::AddrInUse | std::io::ErrorKind::PermissionDenied => {
                    ServerError::Bind { addr, source }
                }
                _ => ServerError::Serve(source),
            })?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
