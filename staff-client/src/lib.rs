//! Staff Client - HTTP client and sync controller for the staff server
//!
//! - [`HttpClient`]: network calls to `/api/employees`
//! - [`EmployeeApi`]: the five resource operations, implemented by [`HttpClient`]
//! - [`SyncController`]: form state, full-list re-fetch after every mutation,
//!   and transient notices

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;

pub use api::EmployeeApi;
pub use config::ClientConfig;
pub use controller::{
    Confirm, DeleteOutcome, EmployeeForm, FormMode, Notice, NoticeBoard, NoticeKind,
    SyncController, TableRow,
};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{Employee, EmployeeDraft};
