//! Main storage browser component.
//!
//! Header with location and item count, the card grid, the path bar, and
//! the preview overlay when a file is selected.

use leptos::prelude::*;

use super::preview::use_preview;
use super::{CardGrid, Header, PathBar, PreviewOverlay};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Storage browser view component.
#[component]
pub fn StorageBrowser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Call use_preview() once here so the resource outlives overlay toggles
    let preview_data = use_preview();

    let has_preview = Signal::derive(move || ctx.browser.preview.with(Option::is_some));

    view! {
        <div class=css::browser>
            <Header />

            <main class=css::body>
                <CardGrid />
            </main>

            <PathBar />

            <Show when=move || has_preview.get()>
                <PreviewOverlay data=preview_data />
            </Show>
        </div>
    }
}
