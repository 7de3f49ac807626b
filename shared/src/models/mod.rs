//! Wire models

pub mod employee;
pub mod serde_helpers;

pub use employee::{Employee, EmployeeDraft, EmployeeInput};
