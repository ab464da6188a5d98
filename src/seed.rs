//! Seed trees
//!
//! A hierarchy can be populated from a YAML or JSON description. Paths are
//! never read from the file; they follow from nesting. A node with a
//! `children` list is a container, anything else is a leaf.
//!
//! ```yaml
//! modified: 2023-01-01
//! children:
//!   - name: Documents
//!     modified: 2023-05-15
//!     children:
//!       - name: Report.pdf
//!         size: 1.2 MB
//!         modified: 2023-06-20
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::error::HierarchyError;
use crate::logic::{formatting, path};
use crate::model::ItemCategory;
use crate::store::HierarchyStore;

/// Tree shipped with the binary, used when no seed file is configured
pub const SAMPLE_SEED: &str = r#"
modified: 2023-01-01
children:
  - name: Documents
    modified: 2023-05-15
    children:
      - { name: Project.docx, size: 245 KB, modified: 2023-05-15 }
      - { name: Report.pdf, size: 1.2 MB, modified: 2023-06-20 }
      - { name: Notes.txt, size: 12 KB, modified: 2023-04-10 }
  - name: Pictures
    modified: 2023-07-10
    children:
      - { name: Vacation.jpg, size: 3.5 MB, modified: 2023-07-10 }
      - { name: Profile.png, size: 1.8 MB, modified: 2023-07-12 }
  - name: Music
    modified: 2023-04-05
    children:
      - { name: Song.mp3, size: 4.7 MB, modified: 2023-04-05 }
  - name: Downloads
    modified: 2023-08-01
    children:
      - { name: Installer.exe, size: 15.2 MB, modified: 2023-08-01 }
  - { name: README.txt, size: 12 KB, modified: 2023-01-01 }
"#;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML seed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON seed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date '{value}' for {path}")]
    InvalidDate { path: String, value: String },

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}

/// Byte count or a human-scaled size string ("1.2 MB")
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SeedSize {
    Bytes(u64),
    Text(String),
}

impl SeedSize {
    pub fn bytes(&self) -> u64 {
        match self {
            SeedSize::Bytes(b) => *b,
            SeedSize::Text(t) => formatting::parse_size(t),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedNode {
    pub name: String,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub size: Option<SeedSize>,
    /// Overrides the category inferred from the extension
    #[serde(default, rename = "type")]
    pub category: Option<ItemCategory>,
    #[serde(default)]
    pub children: Option<Vec<SeedNode>>,
}

/// Root of a seed file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub children: Vec<SeedNode>,
}

impl Seed {
    pub fn from_yaml(text: &str) -> Result<Self, SeedError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json(text: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a seed file; `.json` is parsed as JSON, everything else as YAML
    pub fn from_file(file: &Path) -> Result<Self, SeedError> {
        let text = fs::read_to_string(file).map_err(|source| SeedError::Io {
            path: file.display().to_string(),
            source,
        })?;
        let is_json = file
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json(&text)
        } else {
            Self::from_yaml(&text)
        }
    }

    /// The built-in sample tree
    pub fn sample() -> Result<Self, SeedError> {
        Self::from_yaml(SAMPLE_SEED)
    }

    /// Populate `store` with this tree under its root
    pub fn apply(&self, store: &mut HierarchyStore) -> Result<(), SeedError> {
        // Parent path plus the nodes still to create under it
        let mut stack: Vec<(String, &SeedNode)> = self
            .children
            .iter()
            .rev()
            .map(|n| (path::ROOT.to_string(), n))
            .collect();

        while let Some((parent, node)) = stack.pop() {
            let node_path = path::join(&parent, &node.name);
            let modified = match &node.modified {
                Some(value) => Some(parse_seed_date(&node_path, value)?),
                None => None,
            };

            match &node.children {
                Some(children) => {
                    store.create_container(&parent, &node.name)?;
                    if let Some(modified) = modified {
                        store.set_modified(&node_path, modified)?;
                    }
                    for child in children.iter().rev() {
                        stack.push((node_path.clone(), child));
                    }
                }
                None => {
                    let category = node
                        .category
                        .unwrap_or_else(|| ItemCategory::from_name(&node.name));
                    let size = node.size.as_ref().map(SeedSize::bytes);
                    store.create_leaf(&parent, &node.name, category, size, modified)?;
                }
            }
        }

        if let Some(value) = &self.modified {
            store.set_modified(path::ROOT, parse_seed_date(path::ROOT, value)?)?;
        }
        debug!("seeded {} nodes", store.len());
        Ok(())
    }

    /// Fresh store holding this tree
    pub fn build(&self) -> Result<HierarchyStore, SeedError> {
        let mut store = HierarchyStore::new();
        self.apply(&mut store)?;
        Ok(store)
    }
}

fn parse_seed_date(node_path: &str, value: &str) -> Result<chrono::DateTime<chrono::Utc>, SeedError> {
    formatting::parse_date(value).ok_or_else(|| SeedError::InvalidDate {
        path: node_path.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::formatting::format_date;

    #[test]
    fn test_sample_seed_builds() {
        let store = Seed::sample().unwrap().build().unwrap();
        assert!(store.is_container("/Documents"));
        assert!(store.is_container("/Downloads"));
        let report = store.get("/Documents/Report.pdf").unwrap();
        assert_eq!(report.size(), Some(1_258_291));
        assert_eq!(report.category(), Some(ItemCategory::Document));
        assert_eq!(format_date(report.modified()), "2023-06-20 00:00");
        assert_eq!(
            format_date(store.get("/Pictures").unwrap().modified()),
            "2023-07-10 00:00"
        );
        // root + 4 folders + 8 files
        assert_eq!(store.len(), 13);
        assert!(store.verify_paths());
    }

    #[test]
    fn test_sample_keeps_file_order() {
        let store = Seed::sample().unwrap().build().unwrap();
        let names: Vec<&str> = store
            .children("/Documents")
            .unwrap()
            .iter()
            .map(|n| n.name())
            .collect();
        assert_eq!(names, vec!["Project.docx", "Report.pdf", "Notes.txt"]);
    }

    #[test]
    fn test_json_seed_with_numeric_size_and_type_override() {
        let seed = Seed::from_json(
            r#"{"children": [
                {"name": "empty", "children": []},
                {"name": "blob", "size": 42, "type": "video"}
            ]}"#,
        )
        .unwrap();
        let store = seed.build().unwrap();
        assert!(store.is_container("/empty"));
        let blob = store.get("/blob").unwrap();
        assert_eq!(blob.size(), Some(42));
        assert_eq!(blob.category(), Some(ItemCategory::Video));
    }

    #[test]
    fn test_duplicate_names_in_seed_fail() {
        let seed = Seed::from_yaml("children:\n  - name: a\n  - name: a\n").unwrap();
        assert!(matches!(
            seed.build(),
            Err(SeedError::Hierarchy(HierarchyError::DuplicateName { .. }))
        ));
    }

    #[test]
    fn test_bad_date_is_reported_with_path() {
        let seed = Seed::from_yaml("children:\n  - name: a\n    modified: someday\n").unwrap();
        match seed.build() {
            Err(SeedError::InvalidDate { path, value }) => {
                assert_eq!(path, "/a");
                assert_eq!(value, "someday");
            }
            other => panic!("unexpected {:?}", other.map(|s| s.len())),
        }
    }
}
