//! Data models
//!
//! Shared between the content server and the admin client (via API).
//! Ids are opaque strings assigned by the document store.

pub mod journey;
pub mod ordered;
pub mod project;

// Re-exports
pub use journey::*;
pub use ordered::{OrderedEntity, compare_by_order, sort_by_order};
pub use project::*;
