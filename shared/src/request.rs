//! Request types for the content API

use serde::{Deserialize, Serialize};

/// One `(id, order)` pair in a reorder batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOrderItem {
    pub id: String,
    pub order: u32,
}

impl SortOrderItem {
    pub fn new(id: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            order,
        }
    }
}

/// Body of `POST /api/<resource>/reorder`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSortOrderRequest {
    pub items: Vec<SortOrderItem>,
}

/// `?id=...` query used by update and delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdQuery {
    pub id: String,
}
