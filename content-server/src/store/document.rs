//! Entities the document store knows how to create and patch

use shared::error::{AppError, AppResult, ErrorCode};
use shared::{
    JourneyCreate, JourneyEntry, JourneyUpdate, OrderedEntity, Project, ProjectCreate,
    ProjectUpdate,
};

/// An [`OrderedEntity`] that can live in a [`Collection`](super::Collection)
pub trait Document: OrderedEntity {
    /// Code returned when an id lookup misses
    const NOT_FOUND: ErrorCode;

    /// Display name used in error messages
    const LABEL: &'static str;

    /// Reject a create payload before anything is written
    fn validate(payload: &Self::Create) -> AppResult<()>;

    fn create(id: String, order: u32, created_at: i64, payload: Self::Create) -> Self;

    fn patch(&mut self, payload: Self::Update);
}

impl Document for Project {
    const NOT_FOUND: ErrorCode = ErrorCode::ProjectNotFound;
    const LABEL: &'static str = "Project";

    fn validate(payload: &ProjectCreate) -> AppResult<()> {
        require_title(&payload.title)
    }

    fn create(id: String, order: u32, created_at: i64, payload: ProjectCreate) -> Self {
        Project::from_create(id, order, created_at, payload)
    }

    fn patch(&mut self, payload: ProjectUpdate) {
        self.apply(payload);
    }
}

impl Document for JourneyEntry {
    const NOT_FOUND: ErrorCode = ErrorCode::JourneyEntryNotFound;
    const LABEL: &'static str = "Journey entry";

    fn validate(payload: &JourneyCreate) -> AppResult<()> {
        require_title(&payload.title)
    }

    fn create(id: String, order: u32, created_at: i64, payload: JourneyCreate) -> Self {
        JourneyEntry::from_create(id, order, created_at, payload)
    }

    fn patch(&mut self, payload: JourneyUpdate) {
        self.apply(payload);
    }
}

fn require_title(title: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::with_message(ErrorCode::RequiredField, "Title is required")
            .with_detail("field", "title"));
    }
    Ok(())
}
