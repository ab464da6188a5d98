//! Shared types for the Model
//!
//! Item categories and the display summary handed to the view layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a leaf item, used for the type label and type sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Document,
    Image,
    Audio,
    Video,
    Application,
    #[default]
    #[serde(alias = "file")]
    Other,
}

impl ItemCategory {
    /// Human label shown in the type column
    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Document => "Document",
            ItemCategory::Image => "Image",
            ItemCategory::Audio => "Audio",
            ItemCategory::Video => "Video",
            ItemCategory::Application => "Application",
            ItemCategory::Other => "File",
        }
    }

    /// Infer a category from the item name's extension
    ///
    /// # Examples
    /// ```
    /// use arbor::model::ItemCategory;
    ///
    /// assert_eq!(ItemCategory::from_name("Report.pdf"), ItemCategory::Document);
    /// assert_eq!(ItemCategory::from_name("Vacation.JPG"), ItemCategory::Image);
    /// assert_eq!(ItemCategory::from_name("Song.mp3"), ItemCategory::Audio);
    /// assert_eq!(ItemCategory::from_name("Makefile"), ItemCategory::Other);
    /// ```
    pub fn from_name(name: &str) -> Self {
        let ext = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
            _ => return ItemCategory::Other,
        };

        match ext.as_str() {
            "txt" | "md" | "doc" | "docx" | "pdf" | "odt" | "rtf" | "xls" | "xlsx" | "ppt"
            | "pptx" | "csv" => ItemCategory::Document,
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "tiff" | "tif" | "svg" => {
                ItemCategory::Image
            }
            "mp3" | "wav" | "flac" | "ogg" | "aac" | "m4a" => ItemCategory::Audio,
            "mp4" | "mkv" | "avi" | "mov" | "webm" => ItemCategory::Video,
            "exe" | "msi" | "app" | "dmg" | "deb" | "rpm" | "sh" | "bat" => {
                ItemCategory::Application
            }
            _ => ItemCategory::Other,
        }
    }
}

/// Label used for containers in the type column
pub const CONTAINER_LABEL: &str = "Folder";

/// Flattened view of one node, as returned by directory listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummary {
    pub name: String,
    pub path: String,
    pub is_container: bool,
    pub type_label: String,
    /// Bytes for leaves, None for containers
    pub size: Option<u64>,
    pub size_display: String,
    pub modified: DateTime<Utc>,
    pub modified_display: String,
    /// Number of direct children (containers only)
    pub child_count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(ItemCategory::Document.label(), "Document");
        assert_eq!(ItemCategory::Other.label(), "File");
        assert_eq!(CONTAINER_LABEL, "Folder");
    }

    #[test]
    fn test_from_name_edge_cases() {
        // Dotfiles have no extension
        assert_eq!(ItemCategory::from_name(".profile"), ItemCategory::Other);
        assert_eq!(ItemCategory::from_name("Installer.exe"), ItemCategory::Application);
        assert_eq!(ItemCategory::from_name("clip.WebM"), ItemCategory::Video);
        assert_eq!(ItemCategory::from_name("archive.tar.gz"), ItemCategory::Other);
    }

    #[test]
    fn test_category_deserializes_lowercase() {
        let cat: ItemCategory = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(cat, ItemCategory::Image);
        let cat: ItemCategory = serde_json::from_str("\"file\"").unwrap();
        assert_eq!(cat, ItemCategory::Other);
    }
}
