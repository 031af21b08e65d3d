//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Organization name shown in the page header.
pub const APP_NAME: &str = "PRISM";

/// Page title shown next to the organization name.
pub const APP_TAGLINE: &str = "Storage";

// =============================================================================
// Storage Configuration
// =============================================================================

/// Directory (relative to the page) holding the storage tree.
pub const STORAGE_BASE: &str = "storage";

/// Manifest file name inside every storage folder.
pub const MANIFEST_FILE: &str = "files.json";

/// Default captions used when a manifest entry has no description.
pub mod captions {
    /// Caption for file cards.
    pub const FILE: &str = "Click to view or download";
    /// Caption for folder cards.
    pub const FOLDER: &str = "Click to open folder";
    /// Caption for the go-up card.
    pub const PARENT: &str = "Return to parent folder";
}

/// Feature switches for the storage browser.
///
/// Pages that only list flat files disable `nested_folders`; pages with a
/// bare manifest disable `show_metadata`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Directory holding the storage tree.
    pub storage_base: &'static str,
    /// Manifest file name inside each folder.
    pub manifest_file: &'static str,
    /// Render folder entries and the go-up card.
    pub nested_folders: bool,
    /// Use manifest `name`, `description` and `size` on cards.
    pub show_metadata: bool,
}

impl BrowserConfig {
    /// Full-featured browser over `storage/`.
    pub const DEFAULT: Self = Self {
        storage_base: STORAGE_BASE,
        manifest_file: MANIFEST_FILE,
        nested_folders: true,
        show_metadata: true,
    };
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
