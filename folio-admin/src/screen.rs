//! Projects / Journey admin screen state
//!
//! Glues a [`ReorderEngine`] to a [`ViewState`] so UI callbacks can speak in
//! page-local terms while the engine only sees global indices.

use crate::config::AdminConfig;
use crate::engine::{ReorderEngine, Settlement};
use crate::error::ReorderResult;
use crate::intent::{Direction, ReorderIntent};
use crate::view::{Projection, ViewState};
use folio_client::{PersistenceGateway, ResourceGateway};
use shared::{JourneyEntry, OrderedEntity, Project};

#[derive(Debug)]
pub struct CollectionScreen<T: OrderedEntity, G> {
    engine: ReorderEngine<T, G>,
    view: ViewState,
}

pub type ProjectsScreen = CollectionScreen<Project, ResourceGateway<Project>>;
pub type JourneyScreen = CollectionScreen<JourneyEntry, ResourceGateway<JourneyEntry>>;

impl<T: OrderedEntity> CollectionScreen<T, ResourceGateway<T>> {
    /// Screen talking HTTP to `T::RESOURCE`
    pub fn connect(config: &AdminConfig) -> ReorderResult<Self> {
        let http = config.client.build_http_client()?;
        Ok(Self::new(
            ReorderEngine::new(ResourceGateway::new(http)),
            config.page_size,
        ))
    }
}

impl<T, G> CollectionScreen<T, G>
where
    T: OrderedEntity,
    G: PersistenceGateway<T> + 'static,
{
    pub fn new(engine: ReorderEngine<T, G>, page_size: usize) -> Self {
        Self {
            engine,
            view: ViewState::new(page_size),
        }
    }

    pub fn engine(&self) -> &ReorderEngine<T, G> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ReorderEngine<T, G> {
        &mut self.engine
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Initial load
    pub async fn open(&mut self) -> ReorderResult<()> {
        self.engine.refresh().await
    }

    /// Rows for the current page
    pub fn projection(&mut self) -> Projection<'_, T> {
        self.view.project(self.engine.store())
    }

    /// Whether drag handles and nudge buttons are enabled
    pub fn can_reorder(&self) -> bool {
        self.view.filter().is_reorderable() && !self.engine.is_busy()
    }

    pub async fn nudge(&mut self, id: &str, direction: Direction) -> ReorderResult<Settlement> {
        let filter = self.view.filter().clone();
        self.engine
            .reorder(ReorderIntent::nudge(id, direction), &filter)
            .await
    }

    /// `position` is the 1-based value typed into the row's position input
    pub async fn jump_to_position(&mut self, id: &str, position: i64) -> ReorderResult<Settlement> {
        let filter = self.view.filter().clone();
        self.engine
            .reorder(ReorderIntent::jump_to_position(id, position), &filter)
            .await
    }

    /// Drop result for the current page, ids in their new order
    pub async fn drop_page(&mut self, ids: Vec<String>) -> ReorderResult<Settlement> {
        // A filtered view has no window; the engine rejects it on the
        // filter check before the start index is read.
        let window_start = self
            .projection()
            .window()
            .map(|window| window.start)
            .unwrap_or(0);
        let filter = self.view.filter().clone();
        self.engine
            .reorder(ReorderIntent::Drag { window_start, ids }, &filter)
            .await
    }
}
