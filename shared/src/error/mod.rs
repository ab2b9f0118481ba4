//! Error handling for the content API
//!
//! - [`ErrorCode`]: numeric codes shared by server and admin client
//! - [`ErrorCategory`]: classification by code range
//! - [`AppError`]: rich error with code, message and details
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::ReorderUnknownEntity, "Unknown id")
//!     .with_detail("id", "p-42");
//! assert_eq!(err.http_status().as_u16(), 404);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
