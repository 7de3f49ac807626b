//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::core::ServerState;
use crate::db::repository::{EmployeeRepository, Repository};
use crate::utils::validation::validate_employee;
use crate::utils::{ApiResponse, AppError, AppResult};
use shared::{Employee, EmployeeDraft};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::employee_not_found(&id))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeDraft>, JsonRejection>,
) -> AppResult<Json<Employee>> {
    let Json(draft) = payload?;
    let input = validate_employee(draft)?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.create(input).await?;

    tracing::info!(id = %employee.id, "Employee created");
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeDraft>, JsonRejection>,
) -> AppResult<Json<Employee>> {
    let Json(draft) = payload?;
    let input = validate_employee(draft)?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.update(&id, input).await?;

    tracing::info!(id = %employee.id, "Employee updated");
    Ok(Json(employee))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = EmployeeRepository::new(state.get_db());
    let deleted = repo.delete(&id).await?;

    tracing::info!(id = %deleted.id, "Employee deleted");
    Ok(ApiResponse::ok_with_message("Employee deleted"))
}
