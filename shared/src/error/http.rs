//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound | Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange => StatusCode::BAD_REQUEST,
        }
    }
}
