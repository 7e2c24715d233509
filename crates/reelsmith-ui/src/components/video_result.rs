//! Result container with the video player and download link.

use leptos::prelude::*;

use crate::view::SignalView;

/// Player and download link, hidden until a generation succeeds.
///
/// The `<source>` src is not reactive: [`SignalView`] sets it and reloads the
/// player in one step.
#[component]

pub fn VideoResult(
    /// Handles shared with the controller.
    handles: SignalView,
) -> impl IntoView {
    let download = handles.download;
    let result_visible = handles.result_visible;
    let (video_ref, source_ref) = (handles.video, handles.source);

    view! {
        <section id="result" class="result" hidden=move || !result_visible.get()>
            <video id="video-player" node_ref=video_ref controls=true preload="metadata">
                <source id="video-source" node_ref=source_ref type="video/mp4" />
                "Your browser does not support the video tag."
            </video>
            <a
                id="download-link"
                class="btn btn-primary"
                href=move || download.with(|d| d.as_ref().map(|d| d.href.clone()))
                download=move || download.with(|d| d.as_ref().map(|d| d.filename.clone()))
                data-testid="download-link"
            >
                "Download Video"
            </a>
        </section>
    }
}
