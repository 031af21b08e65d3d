use serde::{Deserialize, Serialize};

use crate::config::captions;

// =============================================================================
// Manifest Types
// =============================================================================

/// Folder manifest loaded from `files.json`.
///
/// Both lists keep manifest order. Missing keys deserialize as empty lists;
/// duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Manifest {
    /// File entries
    #[serde(default)]
    pub files: Vec<FileEntry>,
    /// Subfolder entries
    #[serde(default)]
    pub folders: Vec<FolderEntry>,
}

impl Manifest {
    /// Total number of entries (files + folders).
    pub fn item_count(&self) -> usize {
        self.files.len() + self.folders.len()
    }
}

/// File entry from `files.json`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FileEntry {
    /// Physical file name inside the folder
    pub filename: String,
    /// Display label
    #[serde(default)]
    pub name: Option<String>,
    /// Caption shown under the label
    #[serde(default)]
    pub description: Option<String>,
    /// File size in bytes
    #[serde(default)]
    pub size: Option<u64>,
}

impl FileEntry {
    /// Display label, falling back to the file name.
    pub fn label(&self) -> &str {
        non_empty(&self.name).unwrap_or(&self.filename)
    }

    /// Caption, falling back to the default file caption.
    pub fn caption(&self) -> &str {
        non_empty(&self.description).unwrap_or(captions::FILE)
    }
}

/// Subfolder entry from `files.json`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FolderEntry {
    /// Path segment of the subfolder
    pub foldername: String,
    /// Display label
    #[serde(default)]
    pub name: Option<String>,
    /// Caption shown under the label
    #[serde(default)]
    pub description: Option<String>,
}

impl FolderEntry {
    /// Display label, falling back to the folder name.
    pub fn label(&self) -> &str {
        non_empty(&self.name).unwrap_or(&self.foldername)
    }

    /// Caption, falling back to the default folder caption.
    pub fn caption(&self) -> &str {
        non_empty(&self.description).unwrap_or(captions::FOLDER)
    }
}

/// Empty strings count as absent, matching how the site treated falsy values.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
