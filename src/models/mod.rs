//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Manifest`], [`FileEntry`], [`FolderEntry`] - `files.json` schema
//! - [`StoragePath`] - Logical folder path
//! - [`FileKind`], [`FileIcon`] - Extension-based classification
//! - [`Route`] - Hash-based navigation

mod file_type;
mod manifest;
mod path;
mod route;

pub use file_type::{FileIcon, FileKind, extension, media_mime};
pub use manifest::{FileEntry, FolderEntry, Manifest};
pub use path::StoragePath;
pub use route::Route;
