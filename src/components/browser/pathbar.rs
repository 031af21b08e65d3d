//! Path bar component (macOS Finder style).
//!
//! Displays the current folder at the bottom of the browser with clickable
//! ancestor segments.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::StoragePath;

stylance::import_crate_style!(css, "src/components/browser/pathbar.module.css");

/// Segment data for path bar rendering.
#[derive(Clone, Debug, PartialEq)]
struct PathSegment {
    /// Display label
    label: String,
    /// Storage root segment
    is_root: bool,
    /// Target folder for navigation (None = current/disabled)
    target: Option<StoragePath>,
}

/// Build the segment list for `path`: the storage root followed by one
/// segment per folder. Every segment except the last is navigable.
fn path_segments(path: &StoragePath, storage_base: &str) -> Vec<PathSegment> {
    let mut segments = Vec::with_capacity(path.segments().len() + 1);

    segments.push(PathSegment {
        label: storage_base.to_string(),
        is_root: true,
        target: (!path.is_root()).then(StoragePath::root),
    });

    let mut ancestor = StoragePath::root();
    let last = path.segments().len().saturating_sub(1);
    for (idx, segment) in path.segments().iter().enumerate() {
        ancestor = ancestor.join(segment);
        segments.push(PathSegment {
            label: segment.clone(),
            is_root: false,
            target: (idx != last).then(|| ancestor.clone()),
        });
    }

    segments
}

/// Path bar component displayed at the bottom of the browser.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::pathbar aria-label="Current folder">
            {move || {
                let path = ctx.browser.current_path();
                path_segments(&path, ctx.config.storage_base)
                    .into_iter()
                    .enumerate()
                    .map(|(idx, seg)| {
                        let icon = if seg.is_root { ic::HOME } else { ic::FOLDER };
                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                {match seg.target {
                                    Some(target) => view! {
                                        <SegmentLink
                                            icon=icon
                                            label=seg.label
                                            on_click=move || ctx.open(target.clone())
                                        />
                                    }.into_any(),
                                    None => view! {
                                        <SegmentCurrent icon=icon label=seg.label />
                                    }.into_any(),
                                }}
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// Clickable path segment.
#[component]
fn SegmentLink<F>(icon: icondata::Icon, label: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button class=css::segment on:click=move |_| on_click()>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) path segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button class=format!("{} {}", css::segment, css::segmentCurrent) disabled=true>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
