//! Employee Model

use serde::{Deserialize, Serialize};
use shared::Employee;
use surrealdb::RecordId;

/// Table holding employee documents
pub const EMPLOYEE_TABLE: &str = "employee";

/// Employee document matching the SurrealDB record
///
/// `created_at` is written by the store and only used for ordering, so it is
/// not read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub salary: f64,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id.key().to_string(),
            name: record.name,
            role: record.role,
            salary: record.salary,
        }
    }
}
