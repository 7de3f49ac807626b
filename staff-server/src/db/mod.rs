//! Database Module
//!
//! Opens the SurrealDB document store holding employee records.

pub mod models;
pub mod repository;

use crate::core::ServerError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};

/// Database service, owns a SurrealDB connection
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect to `url` and select namespace/database
    ///
    /// Accepts any SurrealDB endpoint (`mem://`, `rocksdb://path`, ...).
    pub async fn connect(url: &str, namespace: &str, database: &str) -> Result<Self, ServerError> {
        if let Some(path) = url.strip_prefix("rocksdb://")
            && let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ServerError::Database(format!("Failed to create data directory: {e}"))
            })?;
        }

        let db = any::connect(url)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to open database {url}: {e}")))?;

        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to select database: {e}")))?;

        tracing::info!(url = %url, namespace = %namespace, database = %database, "Database connection established");

        Ok(Self { db })
    }
}
