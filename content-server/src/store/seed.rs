//! Initial collections loaded from a JSON file

use crate::core::{Result, ServerError};
use serde::{Deserialize, Serialize};
use shared::{JourneyEntry, Project};
use std::path::Path;

/// `{ "projects": [...], "journey": [...] }`; either key may be omitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub journey: Vec<JourneyEntry>,
}

impl Seed {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let seed: Seed = serde_json::from_str(&raw).map_err(|source| ServerError::Seed {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            projects = seed.projects.len(),
            journey = seed.journey.len(),
            "Seed loaded"
        );
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_partial_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "projects": [{{ "id": "p1", "title": "Site", "order": 0 }}] }}"#
        )
        .unwrap();

        let seed = Seed::load(file.path()).unwrap();
        assert_eq!(seed.projects.len(), 1);
        assert_eq!(seed.projects[0].id.as_deref(), Some("p1"));
        assert!(seed.journey.is_empty());
    }

    #[test]
    fn test_malformed_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[not json").unwrap();
        assert!(matches!(
            Seed::load(file.path()),
            Err(ServerError::Seed { .. })
        ));
    }
}
