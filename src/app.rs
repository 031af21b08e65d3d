//! Root application module.
//!
//! Contains the main App component, AppContext definition, BrowserState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::BrowserConfig;
use crate::core::{ListingState, Navigator, PreviewTarget, load_listing};
use crate::models::{Manifest, Route, StoragePath};
use crate::utils::fetch_json;

// ============================================================================
// BrowserState
// ============================================================================

/// Storage browser state managed with Leptos signals.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct BrowserState {
    /// Active navigation (current path and generation).
    pub navigator: RwSignal<Navigator>,
    /// What the card grid shows.
    pub listing: RwSignal<ListingState>,
    /// File shown in the preview overlay, if open.
    pub preview: RwSignal<Option<PreviewTarget>>,
}

impl BrowserState {
    /// Creates a new browser state at the storage root, loading.
    pub fn new() -> Self {
        Self {
            navigator: RwSignal::new(Navigator::default()),
            listing: RwSignal::new(ListingState::default()),
            preview: RwSignal::new(None),
        }
    }

    /// Current folder.
    pub fn current_path(&self) -> StoragePath {
        self.navigator.with(|n| n.current().clone())
    }

    /// Current folder, read outside of a reactive scope.
    pub fn current_path_untracked(&self) -> StoragePath {
        self.navigator.with_untracked(|n| n.current().clone())
    }

    /// Load the manifest for `path` and replace the grid with it.
    ///
    /// Any navigation still in flight is superseded: its result is dropped
    /// when it arrives.
    pub fn navigate(&self, path: StoragePath, config: BrowserConfig) {
        let Some(request) = self.navigator.try_update(|n| n.begin(path.clone(), &config)) else {
            return;
        };
        self.listing.set(ListingState::Loading { path });

        let navigator = self.navigator;
        let listing = self.listing;
        spawn_local(async move {
            let state = load_listing(&request, &config, |url| async move {
                fetch_json::<Manifest>(&url).await
            })
            .await;

            if let Some(state) = navigator.with_untracked(|n| n.accept(&request, state)) {
                listing.set(state);
            }
        });
    }

    /// Navigate and record the location in browser history.
    pub fn open(&self, path: StoragePath, config: BrowserConfig) {
        Route::new(path.clone()).push();
        self.navigate(path, config);
    }

    /// Open the preview overlay for a file.
    pub fn preview(&self, url: String, display_name: String) {
        self.preview.set(Some(PreviewTarget::new(url, display_name)));
    }

    /// Close the preview overlay.
    pub fn close_preview(&self) {
        self.preview.set(None);
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Enabled browser features and storage location.
    pub config: BrowserConfig,

    /// Storage browser state (navigation, listing, preview).
    pub browser: BrowserState,
}

impl AppContext {
    /// Creates a new application context with the given feature set.
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            browser: BrowserState::new(),
        }
    }

    /// Navigate to `path` with this context's configuration.
    pub fn navigate(&self, path: StoragePath) {
        self.browser.navigate(path, self.config);
    }

    /// Navigate to `path` and push a history entry.
    pub fn open(&self, path: StoragePath) {
        self.browser.open(path, self.config);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(BrowserConfig::DEFAULT)
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router, which owns the storage browser
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::default();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #05030f;
                    color: #e0e0e0;
                    font-family: 'Segoe UI', sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ff9696; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "The storage browser stopped unexpectedly. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: rgba(255, 255, 255, 0.05);
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #8a8aa8;">
                                "Error details"
                            </summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #ff9696;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| crate::utils::dom::reload()
                            style="
                                background: linear-gradient(135deg, #8a5cf6, #3b82f6);
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 8px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
