//! Error codes for the portfolio content API
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 6xxx: Content collection errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried in failed API responses
///
/// Serialized as a plain `u16` so the admin frontend can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Request body has the wrong shape
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Malformed request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 6xxx: Content ====================
    /// Project not found
    ProjectNotFound = 6001,
    /// Journey entry not found
    JourneyEntryNotFound = 6002,
    /// Reorder batch references an id that is not in the collection
    ReorderUnknownEntity = 6003,
    /// Reorder batch lists the same id twice
    ReorderDuplicateEntity = 6004,
}

impl ErrorCode {
    /// Numeric value of the code
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ProjectNotFound => "Project not found",
            Self::JourneyEntryNotFound => "Journey entry not found",
            Self::ReorderUnknownEntity => "Reorder references an unknown entry",
            Self::ReorderDuplicateEntity => "Reorder lists an entry more than once",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Raised when a numeric code does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            6001 => Ok(ErrorCode::ProjectNotFound),
            6002 => Ok(ErrorCode::JourneyEntryNotFound),
            6003 => Ok(ErrorCode::ReorderUnknownEntity),
            6004 => Ok(ErrorCode::ReorderDuplicateEntity),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::ProjectNotFound.code(), 6001);
        assert_eq!(ErrorCode::ReorderUnknownEntity.code(), 6003);
    }

    #[test]
    fn test_try_from_roundtrip() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidRequest,
            ErrorCode::JourneyEntryNotFound,
            ErrorCode::ReorderDuplicateEntity,
            ErrorCode::RequiredField,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(
            InvalidErrorCode(4242).to_string(),
            "invalid error code: 4242"
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::ReorderUnknownEntity).unwrap();
        assert_eq!(json, "6003");
        let back: ErrorCode = serde_json::from_str("6002").unwrap();
        assert_eq!(back, ErrorCode::JourneyEntryNotFound);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }
}
