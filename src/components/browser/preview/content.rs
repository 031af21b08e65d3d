//! Preview body rendering.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::PreviewContent;

stylance::import_crate_style!(css, "src/components/browser/preview/preview.module.css");

/// Preview body: text, native media viewer, or an informational message.
#[component]
pub fn PreviewBody(content: LocalResource<Option<PreviewContent>>) -> impl IntoView {
    view! {
        <Suspense fallback=move || view! {
            <div class=css::message>
                <span class=css::messageIcon><Icon icon=ic::LOADING /></span>
                <p>"Loading file..."</p>
            </div>
        }>
            {move || content.get().flatten().map(render_content)}
        </Suspense>
    }
}

fn render_content(content: PreviewContent) -> AnyView {
    match content {
        // Text nodes are escaped by the renderer; markup shows verbatim.
        PreviewContent::Text(text) => view! { <pre class=css::text>{text}</pre> }.into_any(),
        PreviewContent::Image { url, alt } => {
            view! { <img class=css::image src=url alt=alt /> }.into_any()
        }
        PreviewContent::Pdf { url } => {
            view! { <iframe class=css::pdf src=url title="PDF preview"></iframe> }.into_any()
        }
        PreviewContent::Video { url, mime } => view! {
            <video class=css::media controls=true>
                <source src=url type=mime />
                "Your browser does not support the video tag."
            </video>
        }
        .into_any(),
        PreviewContent::Audio { url, mime } => view! {
            <audio class=css::media controls=true>
                <source src=url type=mime />
                "Your browser does not support the audio tag."
            </audio>
        }
        .into_any(),
        PreviewContent::Unsupported => view! {
            <div class=css::message>
                <span class=css::messageIcon><Icon icon=ic::FILE /></span>
                <p>"This file type cannot be previewed."</p>
                <p>"Please use the download button to save it."</p>
            </div>
        }
        .into_any(),
        PreviewContent::Error(reason) => view! {
            <div class=format!("{} {}", css::message, css::error)>
                <span class=css::messageIcon><Icon icon=ic::WARNING /></span>
                <p>"Error loading file."</p>
                <p>"Please try downloading it instead."</p>
                <p class=css::detail>{reason}</p>
            </div>
        }
        .into_any(),
    }
}
