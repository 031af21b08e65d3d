//! Card grid component for the browser view.
//!
//! Renders the current [`ListingState`]: a loading placeholder, the card set,
//! the empty state, or the error state. Each listing replaces the previous
//! card set entirely.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{Card, FileCard, ListingState};
use crate::models::StoragePath;
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/browser/card_grid.module.css");

#[component]
pub fn CardGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::grid role="list" aria-label="Files and folders">
            {move || {
                let listing = ctx.browser.listing.get();
                let escape = listing.escape_target();
                match listing {
                    ListingState::Loading { .. } => view! { <LoadingState /> }.into_any(),
                    ListingState::Empty { .. } => view! { <EmptyState escape=escape /> }.into_any(),
                    ListingState::Failed { reason, .. } => {
                        view! { <ErrorState reason=reason escape=escape /> }.into_any()
                    }
                    ListingState::Ready { cards, .. } => cards
                        .into_iter()
                        .map(|card| view! { <CardItem card=card /> })
                        .collect_view()
                        .into_any(),
                }
            }}
        </div>
    }
}

/// Keys that open a focused folder-like card.
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[component]
fn CardItem(card: Card) -> impl IntoView {
    let caption = card.caption().to_string();
    match card {
        Card::Parent { target } => {
            view! { <ParentCard target=target caption=caption /> }.into_any()
        }
        Card::Folder { label, target, .. } => {
            view! { <FolderCard label=label caption=caption target=target /> }.into_any()
        }
        Card::File(file) => view! { <FileCardItem file=file /> }.into_any(),
    }
}

/// "Go up one level" card.
#[component]
fn ParentCard(target: StoragePath, caption: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let key_target = target.clone();
    let handle_keydown = move |ev: KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            ctx.open(key_target.clone());
        }
    };

    view! {
        <div
            class=format!("{} {} {}", css::card, css::folderCard, css::parentCard)
            on:click=move |_| ctx.open(target.clone())
            on:keydown=handle_keydown
            role="listitem"
            tabindex="0"
            aria-label="Go to parent folder"
        >
            <span class=css::icon aria-hidden="true"><Icon icon=ic::PARENT /></span>
            <div class=css::name>".. (Go Back)"</div>
            <div class=css::info>{caption}</div>
        </div>
    }
}

#[component]
fn FolderCard(label: String, caption: String, target: StoragePath) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let card_target = target.clone();
    let key_target = target.clone();
    let handle_keydown = move |ev: KeyboardEvent| {
        // The inner button handles its own keys
        if ev.target() == ev.current_target() && is_activation_key(&ev.key()) {
            ev.prevent_default();
            ctx.open(key_target.clone());
        }
    };
    let handle_open = move |ev: MouseEvent| {
        ev.stop_propagation();
        ctx.open(target.clone());
    };
    let aria_label = format!("Folder: {}", label);

    view! {
        <div
            class=format!("{} {}", css::card, css::folderCard)
            on:click=move |_| ctx.open(card_target.clone())
            on:keydown=handle_keydown
            role="listitem"
            tabindex="0"
            aria-label=aria_label
        >
            <span class=css::icon aria-hidden="true"><Icon icon=ic::FOLDER /></span>
            <div class=css::name>{label}</div>
            <div class=css::info>{caption}</div>
            <div class=css::actions>
                <button class=format!("{} {}", css::actionButton, css::wide) on:click=handle_open>
                    "OPEN FOLDER"
                </button>
            </div>
        </div>
    }
}

#[component]
fn FileCardItem(file: FileCard) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let FileCard {
        label,
        caption,
        filename,
        url,
        size,
        icon,
        ..
    } = file;

    let preview_url = url.clone();
    let preview_name = label.clone();
    let handle_preview = move |_: MouseEvent| {
        ctx.browser.preview(preview_url.clone(), preview_name.clone());
    };

    let name_title = filename.clone();
    let aria_label = format!("File: {}", label);

    view! {
        <div class=css::card role="listitem" aria-label=aria_label>
            <span class=css::icon aria-hidden="true"><Icon icon=ic::file_icon(icon) /></span>
            <div class=css::name title=name_title>{label}</div>
            <div class=css::info>{caption}</div>
            {size.map(|bytes| view! { <div class=css::size>{format_size(bytes)}</div> })}
            <div class=css::actions>
                <button class=css::actionButton on:click=handle_preview>
                    <Icon icon=ic::PREVIEW />
                    "VIEW"
                </button>
                <a
                    class=format!("{} {}", css::actionButton, css::download)
                    href=url
                    download=filename
                >
                    <Icon icon=ic::DOWNLOAD />
                    "DOWNLOAD"
                </a>
            </div>
        </div>
    }
}

#[component]
fn LoadingState() -> impl IntoView {
    view! {
        <div class=css::placeholder>
            <span class=css::placeholderIcon><Icon icon=ic::LOADING /></span>
            <p>"Loading files..."</p>
        </div>
    }
}

/// Empty folder, with a way back up when not at the root.
#[component]
fn EmptyState(escape: Option<StoragePath>) -> impl IntoView {
    view! {
        <div class=css::placeholder>
            <span class=css::placeholderIcon><Icon icon=ic::EMPTY /></span>
            <p>"No files or folders found"</p>
            {escape.map(|target| view! { <EscapeButton target=target label="← Back to Parent" /> })}
        </div>
    }
}

/// Manifest failure, with a way back to the root when not already there.
#[component]
fn ErrorState(reason: String, escape: Option<StoragePath>) -> impl IntoView {
    view! {
        <div class=format!("{} {}", css::placeholder, css::placeholderError)>
            <span class=css::placeholderIcon><Icon icon=ic::WARNING /></span>
            <p class=css::errorTitle>"Could not load file list"</p>
            <p class=css::detail>{reason}</p>
            <p class=css::hint>"Make sure the files.json exists at the correct location"</p>
            {escape.map(|target| {
                view! { <EscapeButton target=target label="← Back to Main Storage" /> }
            })}
        </div>
    }
}

#[component]
fn EscapeButton(target: StoragePath, label: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button class=css::actionButton on:click=move |_| ctx.open(target.clone())>
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Escape"));
    }
}
