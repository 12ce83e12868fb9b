/// Framework catalog: the static reference content the dashboard displays.
/// Ships with a built-in catalog; a replacement can be loaded from JSON.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const BUILTIN_JSON: &str = include_str!("../../assets/frameworks.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate framework id '{0}'")]
    DuplicateId(String),
}

/// A titled group of related controls within a framework.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub controls: Vec<String>,
}

/// One security framework with its control sections.
#[derive(Debug, Clone, Deserialize)]
pub struct Framework {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// The full catalog. Built once at startup and never mutated afterwards;
/// the dashboard view and the search index both read from it.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub frameworks: Vec<Framework>,
}

impl Catalog {
    /// The reference catalog bundled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Load a replacement catalog from a JSON file.
    pub fn load(path: &str) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a catalog from a JSON string, rejecting duplicate ids.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let catalog: Catalog = serde_json::from_str(text)?;
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    fn check_unique_ids(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for framework in &self.frameworks {
            if !seen.insert(framework.id.as_str()) {
                return Err(ContentError::DuplicateId(framework.id.clone()));
            }
        }
        Ok(())
    }

    pub fn framework_count(&self) -> usize {
        self.frameworks.len()
    }

    pub fn section_total(&self) -> usize {
        self.frameworks.iter().map(|f| f.sections.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.framework_count(), 8);
        assert_eq!(catalog.section_total(), 24);
        assert!(catalog.frameworks.iter().any(|f| f.id == "nist_csf"));
    }

    #[test]
    fn test_builtin_sections_have_controls() {
        let catalog = Catalog::builtin().unwrap();
        for framework in &catalog.frameworks {
            assert!(!framework.sections.is_empty(), "{} has no sections", framework.id);
            for section in &framework.sections {
                assert!(!section.controls.is_empty());
                assert!(!section.title.is_empty());
            }
        }
    }

    #[test]
    fn test_duplicate_framework_ids_rejected() {
        let json = r#"{
            "frameworks": [
                {"id": "a", "name": "A", "description": "", "sections": []},
                {"id": "a", "name": "A again", "description": "", "sections": []}
            ]
        }"#;
        match Catalog::from_json(json) {
            Err(ContentError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let json = r#"{"frameworks": [{"id": "x", "name": "X", "description": "d"}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.frameworks[0].sections.is_empty());
    }
}
