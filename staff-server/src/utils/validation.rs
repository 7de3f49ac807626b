//! Input validation helpers
//!
//! Turns a loosely-shaped [`EmployeeDraft`] into a typed [`EmployeeInput`]
//! before anything reaches the store.

use shared::{AppError, EmployeeDraft, EmployeeInput, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Employee name and role
pub const MAX_NAME_LEN: usize = 200;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is present, non-blank and within the length limit.
pub fn validate_required_text(
    value: Option<String>,
    field: &str,
    max_len: usize,
) -> Result<String, AppError> {
    let value = value.ok_or_else(|| AppError::required_field(field))?;
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!(
                "{field} is too long ({} chars, max {max_len})",
                value.chars().count()
            ),
        )
        .with_detail("field", field));
    }
    Ok(value)
}

/// Validate that a required amount is present, finite and not negative.
pub fn validate_non_negative_amount(value: Option<f64>, field: &str) -> Result<f64, AppError> {
    let value = value.ok_or_else(|| AppError::required_field(field))?;
    if !value.is_finite() {
        return Err(AppError::validation(format!("{field} must be a finite number"))
            .with_detail("field", field));
    }
    if value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must not be negative"),
        )
        .with_detail("field", field));
    }
    Ok(value)
}

/// Validate a create/update body
///
/// Fields are checked in order name, role, salary; the first failure wins.
pub fn validate_employee(draft: EmployeeDraft) -> Result<EmployeeInput, AppError> {
    Ok(EmployeeInput {
        name: validate_required_text(draft.name, "name", MAX_NAME_LEN)?,
        role: validate_required_text(draft.role, "role", MAX_NAME_LEN)?,
        salary: validate_non_negative_amount(draft.salary, "salary")?,
    })
}
