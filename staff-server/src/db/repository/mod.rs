//! Repository Module
//!
//! CRUD operations over SurrealDB tables.

pub mod employee;

pub use employee::EmployeeRepository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Employee {0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => AppError::employee_not_found(&id),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
///
/// `find_by_id` answers `None` for unknown ids; `update` and `delete`
/// answer [`RepoError::NotFound`].
#[allow(async_fn_in_trait)]
pub trait Repository<T, Input> {
    async fn find_all(&self) -> RepoResult<Vec<T>>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<T>>;
    async fn create(&self, data: Input) -> RepoResult<T>;
    async fn update(&self, id: &str, data: Input) -> RepoResult<T>;
    async fn delete(&self, id: &str) -> RepoResult<T>;
}

// =============================================================================
// ID Convention
// =============================================================================
//
// 对外只暴露记录 key（不带表名），库内用 surrealdb::RecordId：
//   - 创建: RecordId::from_table_key(EMPLOYEE_TABLE, id)
//   - 获取纯ID: id.key().to_string()
//   - select/delete 直接用 (table, key) 元组

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}
