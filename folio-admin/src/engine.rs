//! Reorder engine
//!
//! Every intent goes through the same steps:
//!
//! 1. **Validate** against the filter state, the in-flight flag and the
//!    store. Rejections notify the user and leave the store untouched.
//! 2. **Apply** the move to the local store synchronously.
//! 3. **Diff**: collect `(id, order)` for every entity whose index lies in
//!    the affected span, plus any entity whose stored `order` had drifted.
//! 4. **Persist** the diff as one batch, off the UI path.
//! 5. **Reconcile**: nothing to do on success; on failure the whole
//!    collection is re-fetched and replaces the optimistic state.
//!
//! Only one batch may be outstanding at a time.

use crate::error::{ReorderError, ReorderResult};
use crate::intent::{Direction, ReorderIntent};
use crate::notice::{Notice, Notifier};
use crate::store::CollectionStore;
use crate::view::FilterState;
use folio_client::{ClientResult, PersistenceGateway};
use futures::future::BoxFuture;
use shared::{OrderedEntity, SortOrderItem, sort_by_order};
use std::ops::RangeInclusive;
use std::sync::Arc;
use tokio::sync::mpsc;

/// A validated move, expressed in global indices
#[derive(Debug, Clone, PartialEq, Eq)]
enum Plan {
    Swap { a: usize, b: usize },
    Move { from: usize, to: usize },
    Replace { start: usize, ids: Vec<String> },
}

/// A locally applied reorder whose batch has not settled yet
#[derive(Debug)]
#[must_use = "a pending reorder must be persisted and settled"]
pub struct PendingReorder {
    batch_id: u64,
    items: Vec<SortOrderItem>,
}

impl PendingReorder {
    pub fn batch_id(&self) -> u64 {
        self.batch_id
    }

    /// The `(id, order)` pairs sent to the backend, in index order
    pub fn items(&self) -> &[SortOrderItem] {
        &self.items
    }
}

/// How a reorder ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The intent was a no-op; nothing was sent
    Unchanged,
    /// The backend accepted the batch
    Persisted,
    /// The batch failed and the store was reloaded from the server
    Reconciled,
    /// The batch failed and so did the reload; the store is stale
    Diverged,
    /// The batch was not the outstanding one
    Ignored,
}

/// Owns one screen's collection and serializes its reorders
pub struct ReorderEngine<T: OrderedEntity, G> {
    store: CollectionStore<T>,
    gateway: Arc<G>,
    notifier: Notifier,
    notices: Option<mpsc::UnboundedReceiver<Notice>>,
    in_flight: Option<u64>,
    next_batch_id: u64,
}

impl<T, G> ReorderEngine<T, G>
where
    T: OrderedEntity,
    G: PersistenceGateway<T> + 'static,
{
    pub fn new(gateway: G) -> Self {
        Self::with_gateway(Arc::new(gateway))
    }

    pub fn with_gateway(gateway: Arc<G>) -> Self {
        let (notifier, notices) = Notifier::channel();
        Self {
            store: CollectionStore::new(),
            gateway,
            notifier,
            notices: Some(notices),
            in_flight: None,
            next_batch_id: 1,
        }
    }

    pub fn store(&self) -> &CollectionStore<T> {
        &self.store
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// True while a batch is outstanding; the UI disables reordering
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Take the notice receiver. Only the first call gets it.
    pub fn subscribe(&mut self) -> Option<mpsc::UnboundedReceiver<Notice>> {
        self.notices.take()
    }

    fn reject<R>(&self, err: ReorderError) -> ReorderResult<R> {
        tracing::warn!(resource = T::RESOURCE, error = %err, "Reorder rejected");
        self.notifier.notify(Notice::warning(err.to_string()));
        Err(err)
    }

    // ========== Loading ==========

    /// Full fetch, sorted into render order
    async fn reload(&mut self) -> ReorderResult<()> {
        match self.gateway.fetch_all().await {
            Ok(mut items) => {
                sort_by_order(&mut items);
                tracing::debug!(resource = T::RESOURCE, count = items.len(), "Collection loaded");
                self.store.load(items);
                Ok(())
            }
            Err(err) => {
                tracing::error!(resource = T::RESOURCE, error = %err, "Failed to load collection");
                self.store.mark_stale();
                self.notifier
                    .notify(Notice::error(format!("Could not load the list: {}", err)));
                Err(ReorderError::Gateway(err))
            }
        }
    }

    /// Replace the local collection with the server's
    pub async fn refresh(&mut self) -> ReorderResult<()> {
        if self.is_busy() {
            return self.reject(ReorderError::Busy);
        }
        self.reload().await
    }

    // ========== Reordering ==========

    /// Validate and apply an intent locally.
    ///
    /// Returns `Ok(None)` for a no-op. Otherwise the store already shows
    /// the new order, the engine is busy, and the returned batch must be
    /// handed to [`persist`](Self::persist) and then [`settle`](Self::settle).
    pub fn begin(
        &mut self,
        intent: ReorderIntent,
        filter: &FilterState,
    ) -> ReorderResult<Option<PendingReorder>> {
        if !filter.is_reorderable() {
            return self.reject(ReorderError::FilterActive);
        }
        if self.is_busy() {
            return self.reject(ReorderError::Busy);
        }
        if self.store.is_stale() {
            return self.reject(ReorderError::Stale);
        }

        let plan = match self.plan(intent) {
            Ok(Some(plan)) => plan,
            Ok(None) => return Ok(None),
            Err(err) => return self.reject(err),
        };

        let span = self.apply(plan)?;
        let items = self.diff(span);

        let batch_id = self.next_batch_id;
        self.next_batch_id += 1;
        self.in_flight = Some(batch_id);

        tracing::debug!(
            resource = T::RESOURCE,
            batch_id,
            pairs = items.len(),
            "Reorder applied locally"
        );
        Ok(Some(PendingReorder { batch_id, items }))
    }

    /// Turn an intent into global indices without touching the store
    fn plan(&self, intent: ReorderIntent) -> ReorderResult<Option<Plan>> {
        if self.store.items().iter().any(|e| e.id().is_none()) {
            return Err(ReorderError::UnsavedEntity);
        }

        match intent {
            ReorderIntent::Nudge { id, direction } => {
                let from = self.locate(&id)?;
                let to = match direction {
                    Direction::Up => from.checked_sub(1).ok_or(ReorderError::AlreadyFirst)?,
                    Direction::Down => Some(from + 1)
                        .filter(|&to| to < self.store.len())
                        .ok_or(ReorderError::AlreadyLast)?,
                };
                Ok(Some(Plan::Swap { a: from, b: to }))
            }
            ReorderIntent::Jump { id, target } => {
                let from = self.locate(&id)?;
                let last = self.store.len() as i64 - 1;
                let to = target.clamp(0, last) as usize;
                if to == from {
                    return Ok(None);
                }
                Ok(Some(Plan::Move { from, to }))
            }
            ReorderIntent::Drag { window_start, ids } => {
                let offsets = self.store.window_permutation(window_start, &ids)?;
                if offsets.iter().enumerate().all(|(i, &offset)| i == offset) {
                    return Ok(None);
                }
                Ok(Some(Plan::Replace {
                    start: window_start,
                    ids,
                }))
            }
        }
    }

    fn locate(&self, id: &str) -> ReorderResult<usize> {
        self.store
            .position_of(id)
            .ok_or_else(|| ReorderError::UnknownEntity(id.to_string()))
    }

    /// Mutate the store; returns the inclusive span of changed indices
    fn apply(&mut self, plan: Plan) -> ReorderResult<RangeInclusive<usize>> {
        let span = match plan {
            Plan::Swap { a, b } => {
                self.store.swap(a, b)?;
                a.min(b)..=a.max(b)
            }
            Plan::Move { from, to } => {
                self.store.move_item(from, to)?;
                from.min(to)..=from.max(to)
            }
            Plan::Replace { start, ids } => {
                let before: Vec<String> = self.store.ids()[start..start + ids.len()]
                    .iter()
                    .map(|id| id.to_string())
                    .collect();
                self.store.replace_range(start, &ids)?;
                let first = before.iter().zip(&ids).position(|(a, b)| a != b);
                let last = before.iter().zip(&ids).rposition(|(a, b)| a != b);
                match (first, last) {
                    (Some(first), Some(last)) => start + first..=start + last,
                    _ => start..=start,
                }
            }
        };
        Ok(span)
    }

    /// Pairs for the affected span plus any drifted entity, then renumber
    /// the whole store so local `order` fields match positions.
    fn diff(&mut self, span: RangeInclusive<usize>) -> Vec<SortOrderItem> {
        let items: Vec<SortOrderItem> = self
            .store
            .items()
            .iter()
            .enumerate()
            .filter(|(index, entity)| span.contains(index) || entity.order() != *index as u32)
            .filter_map(|(index, entity)| {
                entity
                    .id()
                    .map(|id| SortOrderItem::new(id, index as u32))
            })
            .collect();

        if !self.store.is_empty() {
            self.store.renumber(0..=self.store.len() - 1);
        }
        items
    }

    /// Future sending the batch. Owns everything it needs, so it can be
    /// spawned; dropping it abandons the request.
    pub fn persist(&self, pending: &PendingReorder) -> BoxFuture<'static, ClientResult<()>> {
        let gateway = Arc::clone(&self.gateway);
        let items = pending.items.clone();
        Box::pin(async move { gateway.reorder_batch(&items).await })
    }

    /// Record the outcome of a batch and reconcile on failure
    pub async fn settle(&mut self, pending: PendingReorder, result: ClientResult<()>) -> Settlement {
        if self.in_flight != Some(pending.batch_id) {
            tracing::warn!(
                resource = T::RESOURCE,
                batch_id = pending.batch_id,
                "Ignoring result for a batch that is not outstanding"
            );
            return Settlement::Ignored;
        }

        let settlement = match result {
            Ok(()) => {
                tracing::info!(
                    resource = T::RESOURCE,
                    batch_id = pending.batch_id,
                    "Order saved"
                );
                self.notifier.notify(Notice::success("Order updated"));
                Settlement::Persisted
            }
            Err(err) => {
                tracing::warn!(
                    resource = T::RESOURCE,
                    batch_id = pending.batch_id,
                    error = %err,
                    "Reorder batch failed, reloading"
                );
                self.notifier.notify(Notice::error(format!(
                    "Failed to save the new order: {}",
                    err
                )));
                match self.reload().await {
                    Ok(()) => Settlement::Reconciled,
                    Err(_) => Settlement::Diverged,
                }
            }
        };

        self.in_flight = None;
        settlement
    }

    /// Begin, persist and settle inline
    pub async fn reorder(
        &mut self,
        intent: ReorderIntent,
        filter: &FilterState,
    ) -> ReorderResult<Settlement> {
        let Some(pending) = self.begin(intent, filter)? else {
            return Ok(Settlement::Unchanged);
        };
        let result = self.persist(&pending).await;
        Ok(self.settle(pending, result).await)
    }

    // ========== CRUD ==========

    fn ensure_idle(&self) -> ReorderResult<()> {
        if self.is_busy() {
            return self.reject(ReorderError::Busy);
        }
        Ok(())
    }

    /// The store is stale until reloaded after any successful write
    async fn after_write(&mut self) {
        self.store.mark_stale();
        let _ = self.reload().await;
    }

    fn report_write_failure(&self, action: &str, err: &folio_client::ClientError) {
        tracing::error!(resource = T::RESOURCE, action, error = %err, "Write failed");
        self.notifier
            .notify(Notice::error(format!("Failed to {}: {}", action, err)));
    }

    pub async fn create(&mut self, payload: &T::Create) -> ReorderResult<T> {
        self.ensure_idle()?;
        match self.gateway.create(payload).await {
            Ok(created) => {
                self.after_write().await;
                Ok(created)
            }
            Err(err) => {
                self.report_write_failure("create", &err);
                Err(err.into())
            }
        }
    }

    pub async fn update(&mut self, id: &str, payload: &T::Update) -> ReorderResult<T> {
        self.ensure_idle()?;
        match self.gateway.update_by_id(id, payload).await {
            Ok(updated) => {
                self.after_write().await;
                Ok(updated)
            }
            Err(err) => {
                self.report_write_failure("update", &err);
                Err(err.into())
            }
        }
    }

    pub async fn delete(&mut self, id: &str) -> ReorderResult<()> {
        self.ensure_idle()?;
        match self.gateway.delete_by_id(id).await {
            Ok(()) => {
                self.after_write().await;
                Ok(())
            }
            Err(err) => {
                self.report_write_failure("delete", &err);
                Err(err.into())
            }
        }
    }
}

impl<T: OrderedEntity, G> std::fmt::Debug for ReorderEngine<T, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReorderEngine")
            .field("resource", &T::RESOURCE)
            .field("len", &self.store.len())
            .field("stale", &self.store.is_stale())
            .field("in_flight", &self.in_flight)
            .finish()
    }
}
