//! Employee Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};

/// Employee as returned by the API
///
/// `id` is the store-assigned record key, without table prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub salary: f64,
}

/// Create/update request body as sent by a client
///
/// Every field is optional so a missing field is reported by validation
/// with its name rather than by the JSON decoder. Unknown fields,
/// including any client-supplied `id`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_f64")]
    pub salary: Option<f64>,
}

/// Validated employee fields, the only shape written to the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub role: String,
    pub salary: f64,
}
