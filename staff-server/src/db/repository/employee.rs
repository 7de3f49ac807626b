//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult, Repository};
use crate::db::models::{EMPLOYEE_TABLE, EmployeeRecord};
use shared::{Employee, EmployeeInput};
use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Count stored employees
    pub async fn count(&self) -> RepoResult<usize> {
        Ok(self.find_all().await?.len())
    }
}

impl Repository<Employee, EmployeeInput> for EmployeeRepository {
    /// Find all employees in creation order
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let records: Vec<EmployeeRecord> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY created_at ASC")
            .await?
            .take(0)?;
        tracing::debug!(count = records.len(), "Loaded employees");
        Ok(records.into_iter().map(Employee::from).collect())
    }

    /// Find employee by id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let record: Option<EmployeeRecord> = self
            .base
            .db()
            .select((EMPLOYEE_TABLE, id.to_string()))
            .await?;
        Ok(record.map(Employee::from))
    }

    /// Create a new employee; the store assigns the id
    async fn create(&self, data: EmployeeInput) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    name = $name,
                    role = $role,
                    salary = $salary,
                    created_at = time::now()
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("role", data.role))
            .bind(("salary", data.salary))
            .await?;

        let created: Option<EmployeeRecord> = result.take(0)?;
        created
            .map(Employee::from)
            .ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Replace all fields of an employee; the id never changes
    async fn update(&self, id: &str, data: EmployeeInput) -> RepoResult<Employee> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(id.to_string()));
        }

        let thing = RecordId::from_table_key(EMPLOYEE_TABLE, id);
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name,
                    role = $role,
                    salary = $salary
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("name", data.name))
            .bind(("role", data.role))
            .bind(("salary", data.salary))
            .await?;

        result
            .take::<Option<EmployeeRecord>>(0)?
            .map(Employee::from)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    /// Hard delete an employee, returning the removed record
    async fn delete(&self, id: &str) -> RepoResult<Employee> {
        let deleted: Option<EmployeeRecord> = self
            .base
            .db()
            .delete((EMPLOYEE_TABLE, id.to_string()))
            .await?;
        deleted
            .map(Employee::from)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }
}
