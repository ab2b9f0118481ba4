//! Folio Admin - ordered collection editing for the portfolio admin
//!
//! - [`CollectionStore`]: the full collection, in render order
//! - [`ViewProjector`] / [`ViewState`]: filtering and pagination
//! - [`ReorderEngine`]: validate, apply, persist and reconcile reorders
//! - [`CollectionScreen`]: a screen's engine plus its view state

pub mod config;
pub mod engine;
pub mod error;
pub mod intent;
pub mod notice;
pub mod screen;
pub mod store;
pub mod view;

pub use config::AdminConfig;
pub use engine::{PendingReorder, ReorderEngine, Settlement};
pub use error::{ReorderError, ReorderResult, StoreError};
pub use intent::{Direction, ReorderIntent};
pub use notice::{Notice, NoticeLevel, Notifier};
pub use screen::{CollectionScreen, JourneyScreen, ProjectsScreen};
pub use store::CollectionStore;
pub use view::{FilterState, Projection, ViewProjector, ViewState, VisibleItem};
