//! Shared preview logic hook.
//!
//! Derives the overlay signals from the selected [`PreviewTarget`] and owns
//! the async content resource.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::{PreviewContent, PreviewTarget, load_preview};
use crate::utils::fetch_text;

/// All derived data needed for preview rendering.
#[derive(Clone, Copy)]
pub struct PreviewData {
    /// Overlay title and suggested download name
    pub title: Signal<String>,
    /// File URL for the download link
    pub download_url: Signal<String>,
    /// Async resolved body (None while nothing is selected)
    pub content: LocalResource<Option<PreviewContent>>,
    /// Selection signal (for closing)
    pub target: RwSignal<Option<PreviewTarget>>,
}

impl PreviewData {
    /// Clear the current selection (close preview).
    pub fn close(&self) {
        self.target.set(None);
    }
}

/// Hook that provides all preview-related derived signals.
///
/// Call this once in the browser view and pass the result to the overlay.
pub fn use_preview() -> PreviewData {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let target = ctx.browser.preview;

    let title = Signal::derive(move || {
        target.with(|t| t.as_ref().map(|t| t.display_name.clone()).unwrap_or_default())
    });

    let download_url =
        Signal::derive(move || target.with(|t| t.as_ref().map(|t| t.url.clone()).unwrap_or_default()));

    // Re-runs whenever the selection changes; only text files hit the network
    let content = LocalResource::new(move || {
        let selected = target.get();
        async move {
            let selected = selected?;
            Some(load_preview(&selected, |url| async move { fetch_text(&url).await }).await)
        }
    });

    PreviewData {
        title,
        download_url,
        content,
        target,
    }
}
