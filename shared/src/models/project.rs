//! Project Model

use super::ordered::{OrderedEntity, contains_ci};
use serde::{Deserialize, Serialize};

/// Portfolio project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// e.g. "web", "mobile", "ml"
    #[serde(default)]
    pub category: String,
    /// e.g. "completed", "in-progress"
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

fn default_status() -> String {
    "completed".to_string()
}

impl Project {
    /// Build a stored project from a create payload
    pub fn from_create(id: String, order: u32, created_at: i64, payload: ProjectCreate) -> Self {
        Self {
            id: Some(id),
            title: payload.title,
            description: payload.description.unwrap_or_default(),
            category: payload.category.unwrap_or_default(),
            status: payload.status.unwrap_or_else(default_status),
            tech_stack: payload.tech_stack,
            image_url: payload.image_url,
            github_url: payload.github_url,
            live_url: payload.live_url,
            featured: payload.featured.unwrap_or(false),
            order,
            created_at: Some(created_at),
        }
    }

    /// Apply a partial update; `None` fields are left untouched
    pub fn apply(&mut self, update: ProjectUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(tech_stack) = update.tech_stack {
            self.tech_stack = tech_stack;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(github_url) = update.github_url {
            self.github_url = Some(github_url);
        }
        if let Some(live_url) = update.live_url {
            self.live_url = Some(live_url);
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(order) = update.order {
            self.order = order;
        }
    }
}

impl OrderedEntity for Project {
    type Create = ProjectCreate;
    type Update = ProjectUpdate;

    const RESOURCE: &'static str = "projects";

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
            || contains_ci(&self.description, needle)
            || self.tech_stack.iter().any(|t| contains_ci(t, needle))
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }
}

/// Create project payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: Option<bool>,
}

/// Update project payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "p1",
            "title": "Ray tracer",
            "category": "graphics",
            "techStack": ["Rust", "WGSL"],
            "order": 3,
            "createdAt": 1700000000000
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id(), Some("p1"));
        assert_eq!(project.status, "completed");
        assert_eq!(project.tech_stack, vec!["Rust", "WGSL"]);
        assert_eq!(project.order(), 3);
        assert_eq!(OrderedEntity::created_at(&project), Some(1_700_000_000_000));
    }

    #[test]
    fn test_search_covers_tech_stack() {
        let project = Project::from_create(
            "p1".into(),
            0,
            1,
            ProjectCreate {
                title: "Chat".into(),
                tech_stack: vec!["Tokio".into()],
                ..Default::default()
            },
        );
        assert!(project.matches_search("tokio"));
        assert!(project.matches_search("cha"));
        assert!(!project.matches_search("django"));
    }

    #[test]
    fn test_apply_partial_update() {
        let mut project = Project::from_create(
            "p1".into(),
            2,
            1,
            ProjectCreate {
                title: "Old".into(),
                category: Some("web".into()),
                ..Default::default()
            },
        );
        project.apply(ProjectUpdate {
            title: Some("New".into()),
            featured: Some(true),
            ..Default::default()
        });
        assert_eq!(project.title, "New");
        assert_eq!(project.category, "web");
        assert!(project.featured);
        assert_eq!(project.order, 2);
    }
}
