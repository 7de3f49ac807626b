//! 员工表单状态
//!
//! Create 模式提交新建请求，Edit 模式提交对 `id` 的替换更新。

use shared::{Employee, EmployeeDraft};

/// Which request a submit sends
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: String,
    },
}

/// Raw field text as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub name: String,
    pub role: String,
    pub salary: String,
    mode: FormMode,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Id being edited, if any
    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Edit { id } => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    /// Submit button label
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Save Employee",
            FormMode::Edit { .. } => "Update Employee",
        }
    }

    /// Cancel is only offered while editing
    pub fn cancel_visible(&self) -> bool {
        self.is_editing()
    }

    /// Fill the fields from a fetched employee and switch to Edit mode
    ///
    /// A second call replaces the first; the last loaded id wins.
    pub fn load(&mut self, employee: &Employee) {
        self.name = employee.name.clone();
        self.role = employee.role.clone();
        self.salary = employee.salary.to_string();
        self.mode = FormMode::Edit {
            id: employee.id.clone(),
        };
    }

    /// Clear all fields and return to Create mode
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Request body for the current field values
    ///
    /// Salary text that does not parse as a number is sent as `null` and
    /// left for the server to reject.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: Some(self.name.clone()),
            role: Some(self.role.clone()),
            salary: self.salary.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}
