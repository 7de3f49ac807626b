//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工管理接口

pub mod employees;
pub mod health;

use axum::http::Uri;
use shared::AppError;

/// 未匹配路由统一返回 JSON 404
pub async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
