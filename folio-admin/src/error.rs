//! Admin error types
//!
//! [`ReorderError`] messages are shown to the user verbatim, so they are
//! phrased as UI text.

use folio_client::ClientError;
use thiserror::Error;

/// Failure of a raw store mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("window {start}..{end} is out of range for {len} items")]
    WindowOutOfRange { start: usize, end: usize, len: usize },

    #[error("new order is not a permutation of the window")]
    NotAPermutation,
}

/// Rejection or failure of a reorder intent or collection action
#[derive(Debug, Error)]
pub enum ReorderError {
    /// A search, category or status filter is active
    #[error("Clear filters to reorder")]
    FilterActive,

    /// A reorder batch is still being saved
    #[error("Please wait for the previous reorder to finish saving")]
    Busy,

    /// The list changed on the server and has not been reloaded yet
    #[error("The list is out of date, refresh before reordering")]
    Stale,

    #[error("Item {0} is not in this list")]
    UnknownEntity(String),

    /// The collection holds an entity with no store id
    #[error("Save all items before reordering")]
    UnsavedEntity,

    #[error("Item is already first")]
    AlreadyFirst,

    #[error("Item is already last")]
    AlreadyLast,

    #[error("Invalid reorder: {0}")]
    Store(#[from] StoreError),

    #[error("Server request failed: {0}")]
    Gateway(#[from] ClientError),
}

pub type ReorderResult<T> = Result<T, ReorderError>;
