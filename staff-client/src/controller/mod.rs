//! Client sync controller
//!
//! 持有表单状态、员工列表和提示；每次成功的变更后重新拉取完整列表，
//! 失败时以 `"Error <action>: <message>"` 的形式显示服务器返回的消息。

mod form;
mod notice;
mod view;

pub use form::{EmployeeForm, FormMode};
pub use notice::{NOTICE_TTL, Notice, NoticeBoard, NoticeKind};
pub use view::{EmployeeTable, TableRow, format_salary};

use std::time::Duration;

use shared::Employee;

use crate::{ClientError, ClientResult, EmployeeApi};

/// Prompt shown before a delete
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

/// Asks the user to confirm a destructive action
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined; no request was sent
    Cancelled,
}

/// Keeps a local view of the employee list in sync with the server
pub struct SyncController<A> {
    api: A,
    form: EmployeeForm,
    employees: Vec<Employee>,
    notices: NoticeBoard,
}

impl<A: EmployeeApi> SyncController<A> {
    pub fn new(api: A) -> Self {
        Self::with_notice_ttl(api, NOTICE_TTL)
    }

    pub fn with_notice_ttl(api: A, ttl: Duration) -> Self {
        Self {
            api,
            form: EmployeeForm::new(),
            employees: Vec::new(),
            notices: NoticeBoard::new(ttl),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    /// Employees from the last successful fetch, in server order
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.employees.iter().map(TableRow::from).collect()
    }

    pub fn render_table(&self) -> String {
        EmployeeTable(&self.rows()).to_string()
    }

    /// Currently visible notice
    pub fn notice(&self) -> Option<Notice> {
        self.notices.current()
    }

    /// Re-fetch the full list
    ///
    /// On failure the previous rows stay in place.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        match self.api.list_employees().await {
            Ok(employees) => {
                tracing::debug!(count = employees.len(), "Employee list refreshed");
                self.employees = employees;
                Ok(())
            }
            Err(e) => Err(self.fail("Error fetching employees", e)),
        }
    }

    /// Submit the form: create in Create mode, replace in Edit mode
    ///
    /// Success resets the form to Create mode and refreshes the list.
    /// Failure leaves the form untouched so the user can correct it.
    pub async fn submit(&mut self) -> ClientResult<Employee> {
        let draft = self.form.to_draft();

        let result = match self.form.editing_id().map(str::to_owned) {
            None => self
                .api
                .create_employee(&draft)
                .await
                .map(|e| (e, "Employee created successfully!"))
                .map_err(|e| self.fail("Error creating employee", e)),
            Some(id) => self
                .api
                .update_employee(&id, &draft)
                .await
                .map(|e| (e, "Employee updated successfully!"))
                .map_err(|e| self.fail("Error updating employee", e)),
        };
        let (employee, text) = result?;

        self.notices.show(Notice::success(text));
        self.form.reset();
        self.refresh_quietly().await;
        Ok(employee)
    }

    /// Fetch one employee and load it into the form in Edit mode
    pub async fn begin_edit(&mut self, id: &str) -> ClientResult<()> {
        match self.api.get_employee(id).await {
            Ok(employee) => {
                self.form.load(&employee);
                Ok(())
            }
            Err(e) => Err(self.fail("Error fetching employee", e)),
        }
    }

    /// Leave Edit mode without sending anything
    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    /// Delete after confirmation; the form mode is left as is
    pub async fn delete(
        &mut self,
        id: &str,
        confirm: &impl Confirm,
    ) -> ClientResult<DeleteOutcome> {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.api.delete_employee(id).await {
            return Err(self.fail("Error deleting employee", e));
        }

        self.notices.show(Notice::success("Employee deleted successfully!"));
        self.refresh_quietly().await;
        Ok(DeleteOutcome::Deleted)
    }

    // The fetch error already replaced the notice
    async fn refresh_quietly(&mut self) {
        let _ = self.refresh().await;
    }

    fn fail(&self, prefix: &str, err: ClientError) -> ClientError {
        tracing::warn!(error = %err, "{}", prefix);
        self.notices
            .show(Notice::error(format!("{}: {}", prefix, err.message())));
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::EmployeeDraft;

    /// In-memory stand-in for the server
    #[derive(Default)]
    struct FakeApi {
        store: Mutex<Vec<Employee>>,
        next_id: Mutex<u32>,
        fail_list: Mutex<bool>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn seeded(names: &[&str]) -> Self {
            let api = Self::default();
            for name in names {
                api.insert(name, "Engineer", 1000.0);
            }
            api
        }

        fn insert(&self, name: &str, role: &str, salary: f64) -> Employee {
            let mut next = self.next_id.lock();
            *next += 1;
            let employee = Employee {
                id: format!("e{}", *next),
                name: name.to_string(),
                role: role.to_string(),
                salary,
            };
            self.store.lock().push(employee.clone());
            employee
        }

        /// Another actor removes a record behind the controller's back
        fn remove(&self, id: &str) {
            self.store.lock().retain(|e| e.id != id);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }

        fn check(draft: &EmployeeDraft) -> ClientResult<(String, String, f64)> {
            let name = draft.name.clone().filter(|s| !s.trim().is_empty());
            let role = draft.role.clone().filter(|s| !s.trim().is_empty());
            match (name, role, draft.salary) {
                (None, _, _) => Err(ClientError::Validation("name is required".into())),
                (_, None, _) => Err(ClientError::Validation("role is required".into())),
                (_, _, None) => Err(ClientError::Validation("salary is required".into())),
                (Some(n), Some(r), Some(s)) => Ok((n, r, s)),
            }
        }

        fn not_found(id: &str) -> ClientError {
            ClientError::NotFound(format!("Employee {id} not found"))
        }
    }

    #[async_trait]
    impl EmployeeApi for FakeApi {
        async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
            self.calls.lock().push("list".into());
            if *self.fail_list.lock() {
                return Err(ClientError::Server {
                    status: 500,
                    message: "Database error".into(),
                });
            }
            Ok(self.store.lock().clone())
        }

        async fn get_employee(&self, id: &str) -> ClientResult<Employee> {
            self.calls.lock().push(format!("get {id}"));
            self.store
                .lock()
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or_else(|| Self::not_found(id))
        }

        async fn create_employee(&self, draft: &EmployeeDraft) -> ClientResult<Employee> {
            self.calls.lock().push("create".into());
            let (name, role, salary) = Self::check(draft)?;
            Ok(self.insert(&name, &role, salary))
        }

        async fn update_employee(
            &self,
            id: &str,
            draft: &EmployeeDraft,
        ) -> ClientResult<Employee> {
            self.calls.lock().push(format!("update {id}"));
            let (name, role, salary) = Self::check(draft)?;
            let mut store = self.store.lock();
            let employee = store
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| Self::not_found(id))?;
            employee.name = name;
            employee.role = role;
            employee.salary = salary;
            Ok(employee.clone())
        }

        async fn delete_employee(&self, id: &str) -> ClientResult<()> {
            self.calls.lock().push(format!("delete {id}"));
            let mut store = self.store.lock();
            let before = store.len();
            store.retain(|e| e.id != id);
            if store.len() == before {
                return Err(Self::not_found(id));
            }
            Ok(())
        }
    }

    fn fill(controller: &mut SyncController<FakeApi>, name: &str, role: &str, salary: &str) {
        let form = controller.form_mut();
        form.name = name.to_string();
        form.role = role.to_string();
        form.salary = salary.to_string();
    }

    #[tokio::test]
    async fn test_refresh_renders_rows_in_order() {
        let mut controller = SyncController::new(FakeApi::seeded(&["A", "B", "C"]));
        controller.refresh().await.unwrap();

        let rows = controller.rows();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(rows[0].salary, "$1000.00");
        assert_eq!(controller.notice(), None);
    }

    #[tokio::test]
    async fn test_create_success_resets_form_and_refreshes() {
        let mut controller = SyncController::new(FakeApi::default());
        fill(&mut controller, "Ada", "Engineer", "95000");

        let created = controller.submit().await.unwrap();
        assert_eq!(created.name, "Ada");
        assert_eq!(
            controller.notice(),
            Some(Notice::success("Employee created successfully!"))
        );
        assert_eq!(controller.form(), &EmployeeForm::new());
        assert_eq!(controller.employees(), &[created]);
        assert_eq!(controller.rows()[0].salary, "$95000.00");
        assert_eq!(controller.api().calls(), vec!["create", "list"]);
    }

    #[tokio::test]
    async fn test_create_failure_keeps_form() {
        let mut controller = SyncController::new(FakeApi::default());
        fill(&mut controller, "Ada", "Engineer", "lots");

        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(
            controller.notice(),
            Some(Notice::error("Error creating employee: salary is required"))
        );
        assert_eq!(controller.form().name, "Ada");
        assert_eq!(controller.form().salary, "lots");
        assert!(controller.employees().is_empty());
        assert_eq!(controller.api().calls(), vec!["create"]);
    }

    #[tokio::test]
    async fn test_edit_then_update() {
        let api = FakeApi::default();
        let ada = api.insert("Ada", "Engineer", 95000.0);
        let mut controller = SyncController::new(api);
        controller.refresh().await.unwrap();

        controller.begin_edit(&ada.id).await.unwrap();
        assert_eq!(controller.form().editing_id(), Some(ada.id.as_str()));
        assert_eq!(controller.form().submit_label(), "Update Employee");
        assert!(controller.form().cancel_visible());

        controller.form_mut().name = "Ada L.".to_string();
        let updated = controller.submit().await.unwrap();
        assert_eq!(updated.id, ada.id);
        assert_eq!(
            controller.notice(),
            Some(Notice::success("Employee updated successfully!"))
        );
        assert_eq!(controller.form().mode(), &FormMode::Create);
        assert_eq!(controller.employees()[0].name, "Ada L.");
        assert_eq!(controller.employees().len(), 1);
    }

    #[tokio::test]
    async fn test_update_after_concurrent_delete() {
        let api = FakeApi::default();
        let ada = api.insert("Ada", "Engineer", 95000.0);
        let mut controller = SyncController::new(api);

        controller.begin_edit(&ada.id).await.unwrap();
        controller.api().remove(&ada.id);

        let err = controller.submit().await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            controller.notice(),
            Some(Notice::error(format!(
                "Error updating employee: Employee {} not found",
                ada.id
            )))
        );
        // Still editing; the user decides what to do next
        assert_eq!(controller.form().editing_id(), Some(ada.id.as_str()));
    }

    #[tokio::test]
    async fn test_begin_edit_unknown_leaves_form() {
        let mut controller = SyncController::new(FakeApi::default());
        fill(&mut controller, "draft", "", "");

        controller.begin_edit("ghost").await.unwrap_err();
        assert_eq!(
            controller.notice(),
            Some(Notice::error("Error fetching employee: Employee ghost not found"))
        );
        assert_eq!(controller.form().name, "draft");
        assert_eq!(controller.form().mode(), &FormMode::Create);
    }

    #[tokio::test]
    async fn test_cancel_edit() {
        let api = FakeApi::default();
        let ada = api.insert("Ada", "Engineer", 95000.0);
        let mut controller = SyncController::new(api);

        controller.begin_edit(&ada.id).await.unwrap();
        controller.cancel_edit();
        assert_eq!(controller.form(), &EmployeeForm::new());
        assert_eq!(controller.api().calls(), vec![format!("get {}", ada.id)]);
    }

    #[tokio::test]
    async fn test_delete_declined_sends_nothing() {
        let mut controller = SyncController::new(FakeApi::seeded(&["A"]));
        controller.refresh().await.unwrap();

        let asked = Mutex::new(None);
        let outcome = controller
            .delete("e1", &|prompt: &str| {
                *asked.lock() = Some(prompt.to_string());
                false
            })
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(asked.lock().as_deref(), Some(DELETE_PROMPT));
        assert_eq!(controller.api().calls(), vec!["list"]);
        assert_eq!(controller.employees().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_confirmed_keeps_form_mode() {
        let api = FakeApi::seeded(&["A", "B"]);
        let mut controller = SyncController::new(api);
        controller.begin_edit("e2").await.unwrap();

        let outcome = controller.delete("e1", &|_: &str| true).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(
            controller.notice(),
            Some(Notice::success("Employee deleted successfully!"))
        );
        let ids: Vec<_> = controller.employees().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e2"]);
        assert_eq!(controller.form().editing_id(), Some("e2"));
    }

    #[tokio::test]
    async fn test_delete_missing_reports_error() {
        let mut controller = SyncController::new(FakeApi::default());
        let err = controller.delete("e9", &|_: &str| true).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            controller.notice(),
            Some(Notice::error("Error deleting employee: Employee e9 not found"))
        );
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_rows() {
        let mut controller = SyncController::new(FakeApi::seeded(&["A"]));
        controller.refresh().await.unwrap();

        *controller.api().fail_list.lock() = true;
        controller.refresh().await.unwrap_err();
        assert_eq!(controller.employees().len(), 1);
        assert_eq!(
            controller.notice(),
            Some(Notice::error("Error fetching employees: Database error"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_auto_dismiss() {
        let mut controller = SyncController::new(FakeApi::default());
        fill(&mut controller, "Ada", "Engineer", "1");
        controller.submit().await.unwrap();
        assert!(controller.notice().is_some());

        tokio::time::sleep(NOTICE_TTL + Duration::from_millis(100)).await;
        assert_eq!(controller.notice(), None);
    }
}
