//! Browser header component.
//!
//! Shows the site title, the current storage location, and the item count.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::core::ListingState;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Browser header with location and item count.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let storage_base = ctx.config.storage_base;

    let location = Memo::new(move |_| ctx.browser.current_path().display(storage_base));
    let count_label = Memo::new(move |_| ctx.browser.listing.with(ListingState::count_label));
    let is_error = Memo::new(move |_| {
        ctx.browser
            .listing
            .with(|l| matches!(l, ListingState::Failed { .. }))
    });

    let count_class = move || {
        if is_error.get() {
            format!("{} {}", css::count, css::countError)
        } else {
            css::count.to_string()
        }
    };

    view! {
        <header class=css::header>
            <div class=css::title>
                <span class=css::brand>{APP_NAME}</span>
                <span class=css::tagline>{APP_TAGLINE}</span>
            </div>

            <div class=css::location>
                <span class=css::locationIcon><Icon icon=ic::FOLDER /></span>
                <span class=css::locationLabel>{move || location.get()}</span>
            </div>

            <span class=count_class aria-live="polite">{move || count_label.get()}</span>
        </header>
    }
}
