//! Database models
//!
//! Records as stored in SurrealDB, converted into wire models at the
//! repository boundary.

pub mod employee;

pub use employee::{EMPLOYEE_TABLE, EmployeeRecord};
