//! Extension-based file classification.
//!
//! Two independent mappings share the same extension lookup:
//! - [`FileKind`] decides how the preview overlay renders a file
//! - [`FileIcon`] picks the card icon

/// Lowercased extension of the last path segment.
///
/// Returns `None` for names without a dot, dotfiles such as `.env`, and
/// names ending in a dot.
pub fn extension(path: &str) -> Option<String> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext.to_lowercase()),
        _ => None,
    }
}

/// Preview category of a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// Read and shown verbatim
    Text,
    Image,
    Pdf,
    Video,
    Audio,
    /// No in-browser preview; download only
    Unsupported,
}

impl FileKind {
    /// Detect preview category from path extension.
    pub fn from_path(path: &str) -> Self {
        match extension(path).as_deref() {
            Some("txt" | "md" | "json" | "xml" | "csv" | "html" | "css" | "js") => Self::Text,
            Some("jpg" | "jpeg" | "png" | "gif" | "webp" | "svg") => Self::Image,
            Some("pdf") => Self::Pdf,
            // ogg is treated as video; both players accept it.
            Some("mp4" | "webm" | "ogg") => Self::Video,
            Some("mp3" | "wav") => Self::Audio,
            _ => Self::Unsupported,
        }
    }
}

/// MIME type for `<source>` elements of media previews.
pub fn media_mime(path: &str) -> Option<&'static str> {
    match extension(path).as_deref() {
        Some("mp4") => Some("video/mp4"),
        Some("webm") => Some("video/webm"),
        Some("ogg") => Some("video/ogg"),
        Some("mp3") => Some("audio/mpeg"),
        Some("wav") => Some("audio/wav"),
        _ => None,
    }
}

/// Card icon category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileIcon {
    Pdf,
    Document,
    Text,
    Image,
    Video,
    Audio,
    Archive,
    Executable,
    Code,
    Web,
    Style,
    Data,
    Spreadsheet,
    #[default]
    Generic,
}

impl FileIcon {
    pub fn from_path(path: &str) -> Self {
        match extension(path).as_deref() {
            Some("pdf") => Self::Pdf,
            Some("doc" | "docx") => Self::Document,
            Some("txt") => Self::Text,
            Some("jpg" | "jpeg" | "png" | "gif") => Self::Image,
            Some("mp4") => Self::Video,
            Some("mp3") => Self::Audio,
            Some("zip" | "rar") => Self::Archive,
            Some("exe") => Self::Executable,
            Some("js") => Self::Code,
            Some("html") => Self::Web,
            Some("css") => Self::Style,
            Some("json" | "xml") => Self::Data,
            Some("csv" | "xls" | "xlsx" | "ppt" | "pptx") => Self::Spreadsheet,
            _ => Self::Generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension("photo.PNG").as_deref(), Some("png"));
        assert_eq!(extension("storage/a.b/archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension("storage/a.b/README"), None);
        assert_eq!(extension(".env"), None);
        assert_eq!(extension("trailing."), None);
    }

    #[test]
    fn test_file_kind_detection() {
        assert_eq!(FileKind::from_path("example.txt"), FileKind::Text);
        assert_eq!(FileKind::from_path("storage/a/data.JSON"), FileKind::Text);
        assert_eq!(FileKind::from_path("script.js"), FileKind::Text);
        assert_eq!(FileKind::from_path("photo.png"), FileKind::Image);
        assert_eq!(FileKind::from_path("logo.svg"), FileKind::Image);
        assert_eq!(FileKind::from_path("paper.pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_path("clip.webm"), FileKind::Video);
        assert_eq!(FileKind::from_path("song.ogg"), FileKind::Video);
        assert_eq!(FileKind::from_path("song.mp3"), FileKind::Audio);
        assert_eq!(FileKind::from_path("setup.exe"), FileKind::Unsupported);
        assert_eq!(FileKind::from_path("Makefile"), FileKind::Unsupported);
    }

    #[test]
    fn test_media_mime() {
        assert_eq!(media_mime("a.mp4"), Some("video/mp4"));
        assert_eq!(media_mime("a.mp3"), Some("audio/mpeg"));
        assert_eq!(media_mime("a.png"), None);
    }

    #[test]
    fn test_file_icon() {
        assert_eq!(FileIcon::from_path("a.pdf"), FileIcon::Pdf);
        assert_eq!(FileIcon::from_path("a.DOCX"), FileIcon::Document);
        assert_eq!(FileIcon::from_path("a.xlsx"), FileIcon::Spreadsheet);
        assert_eq!(FileIcon::from_path("a.rar"), FileIcon::Archive);
    }

    #[test]
    fn test_unknown_extension_uses_default_icon() {
        for name in ["README", "data.bin", "weird.", ".hidden", ""] {
            assert_eq!(FileIcon::from_path(name), FileIcon::Generic);
            assert_eq!(FileIcon::from_path(name), FileIcon::default());
        }
    }
}
