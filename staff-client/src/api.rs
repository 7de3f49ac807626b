//! Employee resource API
//!
//! | 方法 | 路径 |
//! |------|------|
//! | GET | /api/employees |
//! | GET | /api/employees/{id} |
//! | POST | /api/employees |
//! | PUT | /api/employees/{id} |
//! | DELETE | /api/employees/{id} |

use async_trait::async_trait;
use shared::{Employee, EmployeeDraft};

use crate::{ClientResult, HttpClient};

const EMPLOYEES_PATH: [&str; 2] = ["api", "employees"];

/// The five employee operations the sync controller depends on
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// All employees in creation order
    async fn list_employees(&self) -> ClientResult<Vec<Employee>>;

    async fn get_employee(&self, id: &str) -> ClientResult<Employee>;

    async fn create_employee(&self, draft: &EmployeeDraft) -> ClientResult<Employee>;

    /// Replace all fields of an existing employee
    async fn update_employee(&self, id: &str, draft: &EmployeeDraft) -> ClientResult<Employee>;

    async fn delete_employee(&self, id: &str) -> ClientResult<()>;
}

impl HttpClient {
    fn employee_url(&self, id: &str) -> ClientResult<reqwest::Url> {
        let [api, employees] = EMPLOYEES_PATH;
        self.endpoint(&[api, employees, id])
    }
}

#[async_trait]
impl EmployeeApi for HttpClient {
    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get(self.endpoint(&EMPLOYEES_PATH)?).await
    }

    async fn get_employee(&self, id: &str) -> ClientResult<Employee> {
        self.get(self.employee_url(id)?).await
    }

    async fn create_employee(&self, draft: &EmployeeDraft) -> ClientResult<Employee> {
        self.post(self.endpoint(&EMPLOYEES_PATH)?, draft).await
    }

    async fn update_employee(&self, id: &str, draft: &EmployeeDraft) -> ClientResult<Employee> {
        self.put(self.employee_url(id)?, draft).await
    }

    async fn delete_employee(&self, id: &str) -> ClientResult<()> {
        self.delete(self.employee_url(id)?).await
    }
}
