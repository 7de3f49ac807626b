//! 员工表格渲染

use std::fmt;

use shared::Employee;

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Salary as `$` plus two decimals, e.g. `$95000.00`
    pub salary: String,
}

impl From<&Employee> for TableRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            role: employee.role.clone(),
            salary: format_salary(employee.salary),
        }
    }
}

pub fn format_salary(salary: f64) -> String {
    format!("${salary:.2}")
}

/// Plain-text table of rows, in the order given
pub struct EmployeeTable<'a>(pub &'a [TableRow]);

impl fmt::Display for EmployeeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:<w$}` pads by chars, so widths are counted in chars too
        let width = |f: fn(&TableRow) -> &str| {
            self.0
                .iter()
                .map(|r| f(r).chars().count())
                .max()
                .unwrap_or(0)
                .max(4)
        };
        let name_w = width(|r| r.name.as_str());
        let role_w = width(|r| r.role.as_str());

        writeln!(f, "{:<name_w$}  {:<role_w$}  Salary", "Name", "Role")?;
        for row in self.0 {
            writeln!(f, "{:<name_w$}  {:<role_w$}  {}", row.name, row.role, row.salary)?;
        }
        Ok(())
    }
}
