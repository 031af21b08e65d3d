//! Preview resolution for the overlay.
//!
//! Only text-like files are read; every other kind is rendered by a native
//! element pointing straight at the file URL.

use std::future::Future;

use crate::core::error::FetchError;
use crate::models::{FileKind, media_mime};
use crate::utils::log;

/// File selected for preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewTarget {
    /// Resolved file URL (also the download link)
    pub url: String,
    /// Overlay title and suggested download name
    pub display_name: String,
}

impl PreviewTarget {
    pub fn new(url: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            display_name: display_name.into(),
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_path(&self.url)
    }
}

/// Resolved overlay body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewContent {
    /// Raw text, rendered escaped
    Text(String),
    Image { url: String, alt: String },
    Pdf { url: String },
    Video { url: String, mime: Option<&'static str> },
    Audio { url: String, mime: Option<&'static str> },
    /// No in-browser viewer for this type
    Unsupported,
    /// Text read failed; shown inline without closing the overlay
    Error(String),
}

/// Resolve the overlay body for `target`.
///
/// `fetch_text` is only invoked for text-like files.
pub async fn load_preview<F, Fut>(target: &PreviewTarget, fetch_text: F) -> PreviewContent
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, FetchError>>,
{
    let url = target.url.clone();
    match target.kind() {
        FileKind::Text => match fetch_text(url).await {
            Ok(text) => PreviewContent::Text(text),
            Err(e) => {
                log::error(&format!("Error loading file {}: {}", target.url, e));
                PreviewContent::Error(e.to_string())
            }
        },
        FileKind::Image => PreviewContent::Image {
            url,
            alt: target.display_name.clone(),
        },
        FileKind::Pdf => PreviewContent::Pdf { url },
        FileKind::Video => PreviewContent::Video {
            mime: media_mime(&url),
            url,
        },
        FileKind::Audio => PreviewContent::Audio {
            mime: media_mime(&url),
            url,
        },
        FileKind::Unsupported => PreviewContent::Unsupported,
    }
}
