//! API response envelope
//!
//! Every content endpoint answers with the same envelope:
//! ```json
//! { "success": true, "data": [ ... ] }
//! { "success": false, "error": "Project not found", "code": 6001 }
//! ```

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};

/// Unified response envelope for `/api/<resource>` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Error code, present on failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl<T> AppResponse<T> {
    /// Successful response carrying data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            code: None,
        }
    }

    /// Failed response with a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            code: None,
        }
    }
}

impl AppResponse<()> {
    /// Successful response without data
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            code: None,
        }
    }
}

impl<T> From<AppError> for AppResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.message),
            code: Some(err.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    #[test]
    fn test_ok_serializes_without_optional_fields() {
        let json = serde_json::to_string(&AppResponse::<()>::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_error_from_app_error() {
        let err = AppError::with_message(ErrorCode::ProjectNotFound, "Project p-1 not found");
        let response: AppResponse<()> = err.into();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""success":false"#));
        assert!(json.contains(r#""error":"Project p-1 not found""#));
        assert!(json.contains(r#""code":6001"#));
    }

    #[test]
    fn test_deserialize_list_envelope() {
        let json = r#"{"success":true,"data":[1,2,3]}"#;
        let response: AppResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.data, Some(vec![1, 2, 3]));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_deserialize_entity_envelope() {
        // Entities have no Default impl
        let json = r#"{"success":true,"data":{"id":"p1","title":"Site","order":4}}"#;
        let response: AppResponse<Project> = serde_json::from_str(json).unwrap();
        let project = response.data.unwrap();
        assert_eq!(project.id.as_deref(), Some("p1"));
        assert_eq!(project.order, 4);

        let json = r#"{"success":false,"error":"Project p1 not found","code":6001}"#;
        let response: AppResponse<Project> = serde_json::from_str(json).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.code, Some(ErrorCode::ProjectNotFound));
    }
}
