//! Ordered entity contract
//!
//! Anything rendered on the public site in a user-controlled sequence
//! implements [`OrderedEntity`]. The `order` field is the global position.

use serde::{Serialize, de::DeserializeOwned};
use std::cmp::Ordering;

/// An item with a stable identifier and a position in a global sequence
pub trait OrderedEntity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Payload accepted by the create endpoint
    type Create: Serialize + DeserializeOwned + Send + Sync + 'static;
    /// Payload accepted by the update endpoint
    type Update: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Resource segment under `/api/` (e.g. `projects`)
    const RESOURCE: &'static str;

    /// Store-assigned id, `None` until persisted
    fn id(&self) -> Option<&str>;

    fn order(&self) -> u32;

    fn set_order(&mut self, order: u32);

    /// Creation time in milliseconds, used as the tie-break key
    fn created_at(&self) -> Option<i64> {
        None
    }

    /// Case-insensitive match against the searchable text fields.
    /// `needle` is already lowercased and trimmed.
    fn matches_search(&self, needle: &str) -> bool;

    /// Category dimension for the admin filter bar
    fn category(&self) -> Option<&str> {
        None
    }

    /// Status dimension for the admin filter bar
    fn status(&self) -> Option<&str> {
        None
    }
}

/// Render order: `order`, then creation time, then id.
pub fn compare_by_order<T: OrderedEntity>(a: &T, b: &T) -> Ordering {
    a.order()
        .cmp(&b.order())
        .then_with(|| {
            a.created_at()
                .unwrap_or(i64::MAX)
                .cmp(&b.created_at().unwrap_or(i64::MAX))
        })
        .then_with(|| a.id().unwrap_or_default().cmp(b.id().unwrap_or_default()))
}

/// Sort a fetched collection into render order
pub fn sort_by_order<T: OrderedEntity>(items: &mut [T]) {
    items.sort_by(compare_by_order);
}

/// Case-insensitive substring test for a lowercased needle
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
