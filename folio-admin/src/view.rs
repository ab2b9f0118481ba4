//! Filtered, paginated view over a [`CollectionStore`]
//!
//! All pagination index math lives here. The reorder engine only ever sees
//! global indices; a page maps to a contiguous global window only when no
//! filter is active.

use crate::intent::ReorderIntent;
use crate::store::CollectionStore;
use shared::OrderedEntity;
use std::ops::Range;

/// Search box plus category/status dropdowns. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl FilterState {
    /// Reordering is only legal against the unfiltered collection
    pub fn is_reorderable(&self) -> bool {
        self.search.trim().is_empty() && self.category.is_none() && self.status.is_none()
    }

    pub fn matches<T: OrderedEntity>(&self, entity: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() && !entity.matches_search(&needle) {
            return false;
        }
        if let Some(category) = &self.category
            && !entity
                .category()
                .is_some_and(|c| c.eq_ignore_ascii_case(category))
        {
            return false;
        }
        if let Some(status) = &self.status
            && !entity
                .status()
                .is_some_and(|s| s.eq_ignore_ascii_case(status))
        {
            return false;
        }
        true
    }
}

/// One row on screen
#[derive(Debug)]
pub struct VisibleItem<'a, T> {
    pub entity: &'a T,
    /// Position in the unfiltered collection
    pub global_index: usize,
}

impl<T> VisibleItem<'_, T> {
    /// 1-based position shown on the order badge
    pub fn position(&self) -> usize {
        self.global_index + 1
    }
}

#[derive(Debug)]
pub struct Projection<'a, T> {
    pub items: Vec<VisibleItem<'a, T>>,
    /// Clamped 1-based page
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub match_count: usize,
    reorderable: bool,
}

impl<T> Projection<'_, T> {
    pub fn is_reorderable(&self) -> bool {
        self.reorderable
    }

    /// Global slice covered by this page, when it is contiguous
    pub fn window(&self) -> Option<Range<usize>> {
        if !self.reorderable {
            return None;
        }
        let first = self.items.first()?.global_index;
        let last = self.items.last()?.global_index;
        Some(first..last + 1)
    }

    /// Global index of the row at `local_index` on this page
    pub fn global_index(&self, local_index: usize) -> Option<usize> {
        self.items.get(local_index).map(|item| item.global_index)
    }

    /// Drag intent for the page's rows in their dropped order
    pub fn drag_intent(&self, ids: Vec<String>) -> Option<ReorderIntent> {
        let window = self.window()?;
        Some(ReorderIntent::Drag {
            window_start: window.start,
            ids,
        })
    }
}

pub struct ViewProjector;

impl ViewProjector {
    /// `paginate(filter(store))`, each row tagged with its global index
    pub fn project<'a, T: OrderedEntity>(
        store: &'a CollectionStore<T>,
        filter: &FilterState,
        page: usize,
        page_size: usize,
    ) -> Projection<'a, T> {
        let page_size = page_size.max(1);
        let matching: Vec<VisibleItem<'a, T>> = store
            .items()
            .iter()
            .enumerate()
            .filter(|(_, entity)| filter.matches(*entity))
            .map(|(global_index, entity)| VisibleItem {
                entity,
                global_index,
            })
            .collect();

        let match_count = matching.len();
        let total_pages = match_count.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);
        let offset = (page - 1) * page_size;

        let items = matching
            .into_iter()
            .skip(offset)
            .take(page_size)
            .collect();

        Projection {
            items,
            page,
            page_size,
            total_pages,
            match_count,
            reorderable: filter.is_reorderable(),
        }
    }
}

/// Filter and page state of one admin screen
#[derive(Debug, Clone)]
pub struct ViewState {
    filter: FilterState,
    page: usize,
    page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: FilterState::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.filter.category = category;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.filter.status = status;
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Project the store and remember the clamped page
    pub fn project<'a, T: OrderedEntity>(
        &mut self,
        store: &'a CollectionStore<T>,
    ) -> Projection<'a, T> {
        let projection = ViewProjector::project(store, &self.filter, self.page, self.page_size);
        self.page = projection.page;
        projection
    }
}
