//! In-memory document collection
//!
//! Stands in for the hosted document store: every entity is a document
//! keyed by a generated id, and `order` is a plain field with no
//! uniqueness constraint. Only the reorder endpoint validates the whole
//! batch up front, so a rejected batch writes nothing.

use super::Document;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::util::now_millis;
use shared::{SortOrderItem, sort_by_order};
use std::collections::HashSet;
use tokio::sync::RwLock;

#[derive(Debug)]
pub struct Collection<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Document> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Every document, in render order
    pub async fn list(&self) -> Vec<T> {
        let mut items = self.items.read().await.clone();
        sort_by_order(&mut items);
        items
    }

    /// Insert a new document at the end of the order
    pub async fn create(&self, payload: T::Create) -> T {
        let mut items = self.items.write().await;
        let order = items
            .iter()
            .map(|item| item.order())
            .max()
            .map_or(0, |max| max + 1);
        let document = T::create(uuid::Uuid::new_v4().to_string(), order, now_millis(), payload);
        items.push(document.clone());
        tracing::debug!(resource = T::RESOURCE, id = ?document.id(), order, "Document created");
        document
    }

    pub async fn update(&self, id: &str, payload: T::Update) -> AppResult<T> {
        let mut items = self.items.write().await;
        let document = items
            .iter_mut()
            .find(|item| item.id() == Some(id))
            .ok_or_else(|| not_found::<T>(id))?;
        document.patch(payload);
        tracing::debug!(resource = T::RESOURCE, id, "Document updated");
        Ok(document.clone())
    }

    /// Remove a document. Remaining orders keep their gap.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id() != Some(id));
        if items.len() == before {
            return Err(not_found::<T>(id));
        }
        tracing::debug!(resource = T::RESOURCE, id, "Document deleted");
        Ok(())
    }

    /// Apply a batch of `(id, order)` pairs. Rejects the whole batch when
    /// any id is repeated or unknown.
    pub async fn reorder(&self, batch: &[SortOrderItem]) -> AppResult<usize> {
        let mut seen = HashSet::with_capacity(batch.len());
        if let Some(dup) = batch.iter().find(|pair| !seen.insert(pair.id.as_str())) {
            return Err(AppError::with_message(
                ErrorCode::ReorderDuplicateEntity,
                format!("Id {} appears more than once", dup.id),
            )
            .with_detail("id", dup.id.clone()));
        }

        let mut items = self.items.write().await;
        let unknown: Vec<String> = batch
            .iter()
            .filter(|pair| !items.iter().any(|item| item.id() == Some(pair.id.as_str())))
            .map(|pair| pair.id.clone())
            .collect();
        if !unknown.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::ReorderUnknownEntity,
                format!("Unknown {} ids: {}", T::RESOURCE, unknown.join(", ")),
            )
            .with_detail("ids", unknown));
        }

        for pair in batch {
            if let Some(item) = items.iter_mut().find(|item| item.id() == Some(pair.id.as_str())) {
                item.set_order(pair.order);
            }
        }
        Ok(batch.len())
    }
}

fn not_found<T: Document>(id: &str) -> AppError {
    AppError::with_message(T::NOT_FOUND, format!("{} {} not found", T::LABEL, id))
        .with_detail("id", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Project, ProjectCreate, ProjectUpdate};

    fn create(title: &str) -> ProjectCreate {
        ProjectCreate {
            title: title.into(),
            ..Default::default()
        }
    }

    async fn seeded(titles: &[&str]) -> (Collection<Project>, Vec<String>) {
        let collection = Collection::<Project>::new();
        let mut ids = Vec::new();
        for title in titles {
            let project = collection.create(create(title)).await;
            ids.push(project.id.unwrap());
        }
        (collection, ids)
    }

    impl<T: Document> Collection<T> {
        async fn len(&self) -> usize {
            self.items.read().await.len()
        }

        async fn get(&self, id: &str) -> AppResult<T> {
            self.items
                .read()
                .await
                .iter()
                .find(|item| item.id() == Some(id))
                .cloned()
                .ok_or_else(|| not_found::<T>(id))
        }
    }

    fn titles(items: &[Project]) -> Vec<&str> {
        items.iter().map(|p| p.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_appends_after_highest_order() {
        let (collection, ids) = seeded(&["a", "b"]).await;
        collection.delete(&ids[0]).await.unwrap();

        let c = collection.create(create("c")).await;
        assert_eq!(c.order, 2);
        assert!(c.created_at.is_some());
        assert_eq!(titles(&collection.list().await), vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_reorder_applies_all_pairs() {
        let (collection, ids) = seeded(&["a", "b", "c"]).await;
        let batch = vec![
            SortOrderItem::new(ids[2].clone(), 0),
            SortOrderItem::new(ids[0].clone(), 1),
            SortOrderItem::new(ids[1].clone(), 2),
        ];
        assert_eq!(collection.reorder(&batch).await.unwrap(), 3);
        assert_eq!(titles(&collection.list().await), vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_reorder_with_unknown_id_writes_nothing() {
        let (collection, ids) = seeded(&["a", "b"]).await;
        let batch = vec![
            SortOrderItem::new(ids[1].clone(), 0),
            SortOrderItem::new("ghost", 1),
        ];
        let err = collection.reorder(&batch).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ReorderUnknownEntity);
        assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
        assert_eq!(titles(&collection.list().await), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_reorder_with_duplicate_id_is_rejected() {
        let (collection, ids) = seeded(&["a", "b"]).await;
        let batch = vec![
            SortOrderItem::new(ids[0].clone(), 1),
            SortOrderItem::new(ids[0].clone(), 0),
        ];
        let err = collection.reorder(&batch).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ReorderDuplicateEntity);
        assert_eq!(titles(&collection.list().await), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let (collection, ids) = seeded(&["a"]).await;

        let updated = collection
            .update(
                &ids[0],
                ProjectUpdate {
                    title: Some("renamed".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "renamed");
        assert_eq!(collection.get(&ids[0]).await.unwrap().title, "renamed");

        let err = collection.delete("nope").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProjectNotFound);
        assert_eq!(collection.len().await, 1);
    }
}
