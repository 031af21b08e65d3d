//! Modal preview overlay.
//!
//! Closes on the close button, a click on the backdrop, or Escape.

use leptos::ev::{self, MouseEvent};
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_document, use_event_listener};

use super::{PreviewBody, PreviewData};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/preview/preview.module.css");

/// Preview overlay component.
#[component]
pub fn PreviewOverlay(data: PreviewData) -> impl IntoView {
    // Listener is removed with the overlay's owner
    let _ = use_event_listener(use_document(), ev::keydown, move |event| {
        if event.key() == "Escape" {
            data.close();
        }
    });

    view! {
        <div
            class=css::backdrop
            on:click=move |_| data.close()
            role="dialog"
            aria-modal="true"
            aria-label="File preview"
        >
            <div class=css::modal on:click=|event: MouseEvent| event.stop_propagation()>
                <header class=css::header>
                    <span class=css::title>{move || data.title.get()}</span>
                    <button
                        class=css::closeButton
                        on:click=move |_| data.close()
                        title="Close preview"
                        aria-label="Close preview"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::body>
                    <PreviewBody content=data.content />
                </div>

                <footer class=css::footer>
                    <a
                        class=css::downloadButton
                        href=move || data.download_url.get()
                        download=move || data.title.get()
                    >
                        <Icon icon=ic::DOWNLOAD />
                        "Download"
                    </a>
                </footer>
            </div>
        </div>
    }
}
