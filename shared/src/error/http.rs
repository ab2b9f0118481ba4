//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// HTTP status returned alongside this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound
            | Self::ProjectNotFound
            | Self::JourneyEntryNotFound
            | Self::ReorderUnknownEntity => StatusCode::NOT_FOUND,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::ReorderDuplicateEntity => StatusCode::BAD_REQUEST,
        }
    }
}
