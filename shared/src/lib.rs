//! Shared types for the staff records workspace
//!
//! Wire models and the unified error system used by both `staff-server`
//! and `staff-client`.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Employee, EmployeeDraft, EmployeeInput};
