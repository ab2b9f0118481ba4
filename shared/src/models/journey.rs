//! Journey (timeline) Model

use super::ordered::{OrderedEntity, contains_ci};
use serde::{Deserialize, Serialize};

/// Kind of timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyKind {
    #[default]
    Work,
    Education,
    Achievement,
}

impl JourneyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Education => "education",
            Self::Achievement => "achievement",
        }
    }
}

/// Entry on the public "journey" timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub kind: JourneyKind,
    /// Free-form period label, e.g. "2021 - Present"
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl JourneyEntry {
    pub fn from_create(id: String, order: u32, created_at: i64, payload: JourneyCreate) -> Self {
        Self {
            id: Some(id),
            title: payload.title,
            organization: payload.organization.unwrap_or_default(),
            kind: payload.kind.unwrap_or_default(),
            period: payload.period.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            order,
            created_at: Some(created_at),
        }
    }

    pub fn apply(&mut self, update: JourneyUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(organization) = update.organization {
            self.organization = organization;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(period) = update.period {
            self.period = period;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(order) = update.order {
            self.order = order;
        }
    }
}

impl OrderedEntity for JourneyEntry {
    type Create = JourneyCreate;
    type Update = JourneyUpdate;

    const RESOURCE: &'static str = "journey";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }

    fn created_at(&self) -> Option<i64> {
        self.created_at
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle)
            || contains_ci(&self.organization, needle)
            || contains_ci(&self.description, needle)
    }

    fn category(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }
}

/// Create journey entry payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyCreate {
    pub title: String,
    pub organization: Option<String>,
    pub kind: Option<JourneyKind>,
    pub period: Option<String>,
    pub description: Option<String>,
}

/// Update journey entry payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyUpdate {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub kind: Option<JourneyKind>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub order: Option<u32>,
}
