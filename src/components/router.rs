//! Application router component.
//!
//! Handles hash routing so the browsed folder is reflected in the URL.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **Navigation state is the source of truth**: the hash only mirrors it
//! - **hashchange events**: Browser back/forward buttons navigate the browser
//! - **Deep links**: the initial hash selects the first folder to load

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::browser::StorageBrowser;
use crate::models::Route;
use crate::utils::dom;

/// Main application router.
///
/// - `#/` → storage root
/// - `#/folder/sub` → nested folder
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Normalize the hash (e.g. "" or "#" -> "#/") without a history entry.
    let initial = Route::current();
    dom::replace_hash(&initial.to_hash());
    ctx.navigate(initial.path);

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            let route = Route::current();
            if route.path != ctx.browser.current_path_untracked() {
                ctx.browser.close_preview();
                ctx.navigate(route.path);
            }
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! { <StorageBrowser /> }
}
