//! Local copy of a full ordered collection
//!
//! The store holds every entity of one collection, sorted by `order`.
//! Reorder primitives only permute positions; no entity is ever created or
//! dropped by them.

use crate::error::StoreError;
use shared::OrderedEntity;
use std::ops::RangeInclusive;

#[derive(Debug, Clone)]
pub struct CollectionStore<T> {
    items: Vec<T>,
    stale: bool,
}

impl<T> Default for CollectionStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            stale: false,
        }
    }
}

impl<T: OrderedEntity> CollectionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection. The caller supplies render order.
    pub fn load(&mut self, items: Vec<T>) {
        self.items = items;
        self.stale = false;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Global index of the entity with this id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|e| e.id() == Some(id))
    }

    /// Ids in render order; unsaved entities are skipped
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().filter_map(|e| e.id()).collect()
    }

    /// True once a create/update/delete has gone through since the last load
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Exchange two positions
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), StoreError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.items.swap(a, b);
        Ok(())
    }

    /// Remove the entity at `from` and reinsert it at `to`; everything in
    /// between shifts by one.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(())
    }

    /// For the window starting at `start`, map each id in `ids` to its
    /// offset inside the window. Fails unless `ids` is a permutation of
    /// the window's ids.
    pub(crate) fn window_permutation(
        &self,
        start: usize,
        ids: &[String],
    ) -> Result<Vec<usize>, StoreError> {
        let len = self.items.len();
        let end = start
            .checked_add(ids.len())
            .filter(|&end| end <= len)
            .ok_or(StoreError::WindowOutOfRange {
                start,
                end: start.saturating_add(ids.len()),
                len,
            })?;
        let window = &self.items[start..end];

        let mut taken = vec![false; window.len()];
        let mut offsets = Vec::with_capacity(ids.len());
        for id in ids {
            let offset = window
                .iter()
                .enumerate()
                .position(|(i, e)| !taken[i] && e.id() == Some(id.as_str()))
                .ok_or(StoreError::NotAPermutation)?;
            taken[offset] = true;
            offsets.push(offset);
        }
        Ok(offsets)
    }

    /// Overwrite the window `[start, start + ids.len())` with the same
    /// entities in the order given by `ids`.
    pub fn replace_range(&mut self, start: usize, ids: &[String]) -> Result<(), StoreError> {
        let offsets = self.window_permutation(start, ids)?;
        let end = start + offsets.len();
        let reordered: Vec<T> = offsets
            .iter()
            .map(|&offset| self.items[start + offset].clone())
            .collect();
        self.items.splice(start..end, reordered);
        Ok(())
    }

    /// Set `order = index` for every entity in `range`
    pub fn renumber(&mut self, range: RangeInclusive<usize>) {
        let end = (*range.end()).min(self.items.len().saturating_sub(1));
        for index in *range.start()..=end {
            if let Some(entity) = self.items.get_mut(index) {
                entity.set_order(index as u32);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use shared::Project;

    pub(crate) fn project(id: &str, order: u32) -> Project {
        Project {
            id: Some(id.to_string()),
            title: format!("Project {}", id),
            description: String::new(),
            category: "web".into(),
            status: "completed".into(),
            tech_stack: vec![],
            image_url: None,
            github_url: None,
            live_url: None,
            featured: false,
            order,
            created_at: None,
        }
    }

    pub(crate) fn store_of(ids: &[&str]) -> CollectionStore<Project> {
        let mut store = CollectionStore::new();
        store.load(
            ids.iter()
                .enumerate()
                .map(|(i, id)| project(id, i as u32))
                .collect(),
        );
        store
    }

    fn strings(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_trusts_given_order() {
        let mut store = CollectionStore::new();
        store.load(vec![project("b", 1), project("a", 0)]);
        assert_eq!(store.ids(), vec!["b", "a"]);
        assert_eq!(store.position_of("a"), Some(1));
        assert_eq!(store.position_of("zz"), None);
    }

    #[test]
    fn test_swap_twice_restores_order() {
        let mut store = store_of(&["a", "b", "c", "d"]);
        let before = store.items().to_vec();
        store.swap(0, 3).unwrap();
        assert_eq!(store.ids(), vec!["d", "b", "c", "a"]);
        store.swap(0, 3).unwrap();
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_swap_out_of_range() {
        let mut store = store_of(&["a", "b"]);
        assert_eq!(
            store.swap(0, 2),
            Err(StoreError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(store.ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_move_item_shifts_intermediates() {
        let mut store = store_of(&["a", "b", "c", "d", "e"]);
        store.move_item(3, 1).unwrap();
        assert_eq!(store.ids(), vec!["a", "d", "b", "c", "e"]);
        store.move_item(1, 4).unwrap();
        assert_eq!(store.ids(), vec!["a", "b", "c", "e", "d"]);
    }

    #[test]
    fn test_replace_range_inside_window() {
        let mut store = store_of(&["a", "b", "c", "d", "e", "f"]);
        store.replace_range(2, &strings(&["e", "c", "d"])).unwrap();
        assert_eq!(store.ids(), vec!["a", "b", "e", "c", "d", "f"]);
    }

    #[test]
    fn test_replace_range_rejects_foreign_or_duplicate_ids() {
        let mut store = store_of(&["a", "b", "c", "d"]);
        assert_eq!(
            store.replace_range(1, &strings(&["c", "a"])),
            Err(StoreError::NotAPermutation)
        );
        assert_eq!(
            store.replace_range(1, &strings(&["b", "b"])),
            Err(StoreError::NotAPermutation)
        );
        assert!(matches!(
            store.replace_range(3, &strings(&["d", "x"])),
            Err(StoreError::WindowOutOfRange { .. })
        ));
        assert_eq!(store.ids(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_renumber_range() {
        let mut store = CollectionStore::new();
        store.load(vec![project("a", 7), project("b", 7), project("c", 9)]);
        store.renumber(0..=1);
        let orders: Vec<u32> = store.items().iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![0, 1, 9]);
    }

    #[test]
    fn test_stale_flag_cleared_by_load() {
        let mut store = store_of(&["a"]);
        store.mark_stale();
        assert!(store.is_stale());
        store.load(vec![project("a", 0)]);
        assert!(!store.is_stale());
    }
}
