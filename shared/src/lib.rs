//! Shared types for the portfolio admin
//!
//! Models, wire envelopes and error codes used by both the content
//! server and the admin client.

pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    JourneyCreate, JourneyEntry, JourneyKind, JourneyUpdate, OrderedEntity, Project, ProjectCreate,
    ProjectUpdate, sort_by_order,
};
pub use request::{BatchSortOrderRequest, IdQuery, SortOrderItem};
pub use response::AppResponse;
