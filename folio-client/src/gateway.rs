//! Persistence gateway for ordered content collections
//!
//! The admin engine talks to the document store only through
//! [`PersistenceGateway`]. [`ResourceGateway`] implements it over the
//! `/api/<resource>` endpoints:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | fetch_all | `GET /api/<resource>` |
//! | reorder_batch | `POST /api/<resource>/reorder` |
//! | create | `POST /api/<resource>` |
//! | update_by_id | `PUT /api/<resource>?id=...` |
//! | delete_by_id | `DELETE /api/<resource>?id=...` |

use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use shared::{AppResponse, BatchSortOrderRequest, OrderedEntity, SortOrderItem};
use std::marker::PhantomData;

/// Backend contract used by the reorder engine
///
/// No atomicity is assumed: a failed `reorder_batch` may have applied any
/// subset of its pairs.
#[async_trait]
pub trait PersistenceGateway<T: OrderedEntity>: Send + Sync {
    /// Every entity in the collection, in no particular order
    async fn fetch_all(&self) -> ClientResult<Vec<T>>;

    /// Apply each `(id, order)` pair
    async fn reorder_batch(&self, items: &[SortOrderItem]) -> ClientResult<()>;

    async fn create(&self, payload: &T::Create) -> ClientResult<T>;

    async fn update_by_id(&self, id: &str, payload: &T::Update) -> ClientResult<T>;

    async fn delete_by_id(&self, id: &str) -> ClientResult<()>;
}

/// HTTP gateway for one resource collection
#[derive(Debug)]
pub struct ResourceGateway<T, C = NetworkHttpClient> {
    http: C,
    path: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T: OrderedEntity, C: HttpClient> ResourceGateway<T, C> {
    /// Gateway for `T::RESOURCE`
    pub fn new(http: C) -> Self {
        Self::with_resource(http, T::RESOURCE)
    }

    /// Gateway for an explicit resource segment
    pub fn with_resource(http: C, resource: &str) -> Self {
        Self {
            http,
            path: format!("api/{}", resource.trim_matches('/')),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<T, C: Clone> Clone for ResourceGateway<T, C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            path: self.path.clone(),
            _entity: PhantomData,
        }
    }
}

/// Unwrap an envelope that must carry data
fn into_data<D>(envelope: AppResponse<D>, what: &str) -> ClientResult<D> {
    if !envelope.success {
        return Err(ClientError::Rejected(
            envelope.error.unwrap_or_else(|| format!("{} failed", what)),
        ));
    }
    envelope
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
}

/// Check an envelope whose data is ignored
fn into_unit<D>(envelope: AppResponse<D>, what: &str) -> ClientResult<()> {
    if envelope.success {
        Ok(())
    } else {
        Err(ClientError::Rejected(
            envelope.error.unwrap_or_else(|| format!("{} failed", what)),
        ))
    }
}

#[async_trait]
impl<T, C> PersistenceGateway<T> for ResourceGateway<T, C>
where
    T: OrderedEntity,
    C: HttpClient,
{
    async fn fetch_all(&self) -> ClientResult<Vec<T>> {
        let envelope: AppResponse<Vec<T>> = self.http.get(&self.path).await?;
        let items = into_data(envelope, "list")?;
        tracing::debug!(resource = %self.path, count = items.len(), "Fetched collection");
        Ok(items)
    }

    async fn reorder_batch(&self, items: &[SortOrderItem]) -> ClientResult<()> {
        let body = BatchSortOrderRequest {
            items: items.to_vec(),
        };
        let path = format!("{}/reorder", self.path);
        let envelope: AppResponse<serde_json::Value> = self.http.post(&path, &body).await?;
        into_unit(envelope, "reorder")?;
        tracing::debug!(resource = %self.path, pairs = items.len(), "Reorder batch accepted");
        Ok(())
    }

    async fn create(&self, payload: &T::Create) -> ClientResult<T> {
        let envelope: AppResponse<T> = self.http.post(&self.path, payload).await?;
        into_data(envelope, "create")
    }

    async fn update_by_id(&self, id: &str, payload: &T::Update) -> ClientResult<T> {
        let envelope: AppResponse<T> = self.http.put(&self.path, &[("id", id)], payload).await?;
        into_data(envelope, "update")
    }

    async fn delete_by_id(&self, id: &str) -> ClientResult<()> {
        let envelope: AppResponse<serde_json::Value> =
            self.http.delete(&self.path, &[("id", id)]).await?;
        into_unit(envelope, "delete")
    }
}
