//! Logical storage paths.
//!
//! A [`StoragePath`] identifies the folder whose manifest is being browsed,
//! independent of where the storage tree is physically hosted.

use std::fmt;

/// `/`-joined sequence of folder segments. Root is the empty sequence.
///
/// Segments are never validated or sanitized; whatever a manifest names as a
/// `foldername` becomes a segment verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StoragePath {
    segments: Vec<String>,
}

impl StoragePath {
    /// The storage root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a `/`-joined path. Empty segments are dropped, so `""`, `"/"`
    /// and `"a//b/"` normalize to root, root and `a/b`.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Child path. A segment containing `/` contributes several segments.
    pub fn join(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(
            segment
                .split('/')
                .filter(|s| !s.is_empty())
                .map(String::from),
        );
        Self { segments }
    }

    /// Path with the last segment removed. The parent of root is root.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// `/`-joined form without leading or trailing slash (`""` for root).
    pub fn as_string(&self) -> String {
        self.segments.join("/")
    }

    /// Location label shown in the header, e.g. `/storage/docs/2024`.
    pub fn display(&self, storage_base: &str) -> String {
        if self.is_root() {
            format!("/{}", storage_base)
        } else {
            format!("/{}/{}", storage_base, self.as_string())
        }
    }

    /// Directory URL prefix for this path, always ending in `/`.
    fn dir_url(&self, storage_base: &str) -> String {
        if self.is_root() {
            format!("{}/", storage_base)
        } else {
            format!("{}/{}/", storage_base, self.as_string())
        }
    }

    /// URL of this folder's manifest, e.g. `storage/a/b/files.json`.
    pub fn manifest_url(&self, storage_base: &str, manifest_file: &str) -> String {
        format!("{}{}", self.dir_url(storage_base), manifest_file)
    }

    /// URL of a file inside this folder, e.g. `storage/a/report.pdf`.
    pub fn file_url(&self, storage_base: &str, filename: &str) -> String {
        format!("{}{}", self.dir_url(storage_base), filename)
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}
