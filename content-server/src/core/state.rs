use std::sync::Arc;

use shared::{JourneyEntry, Project};

use crate::core::{Config, Result};
use crate::store::{Collection, Document, Seed};

/// State shared by every handler
///
/// Cloning is cheap; each collection sits behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Config,
    pub projects: Arc<Collection<Project>>,
    pub journey: Arc<Collection<JourneyEntry>>,
}

impl ServerState {
    /// Empty collections
    pub fn new(config: Config) -> Self {
        Self::with_seed(config, Seed::default())
    }

    pub fn with_seed(config: Config, seed: Seed) -> Self {
        Self {
            config,
            projects: Arc::new(Collection::from_items(seed.projects)),
            journey: Arc::new(Collection::from_items(seed.journey)),
        }
    }

    /// Build the state, loading `SEED_FILE` when configured
    pub fn initialize(config: &Config) -> Result<Self> {
        let seed = match &config.seed_file {
            Some(path) => Seed::load(path)?,
            None => Seed::default(),
        };
        Ok(Self::with_seed(config.clone(), seed))
    }
}

/// Maps an entity type to its collection, so one set of handlers serves
/// every resource
pub trait HasCollection<T: Document> {
    fn collection(&self) -> &Collection<T>;
}

impl HasCollection<Project> for ServerState {
    fn collection(&self) -> &Collection<Project> {
        &self.projects
    }
}

impl HasCollection<JourneyEntry> for ServerState {
    fn collection(&self) -> &Collection<JourneyEntry> {
        &self.journey
    }
}
