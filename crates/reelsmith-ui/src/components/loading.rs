//! Loading indicator shown while a generation request is outstanding.

use leptos::prelude::*;

/// A spinning loading indicator.
///
/// Customizable size via the `size` prop (in pixels).
#[component]

pub fn Spinner(
    /// Size of the spinner in pixels.
    #[prop(default = 16)]
    size: u32,
) -> impl IntoView {
    let style = format!("width: {size}px; height: {size}px;");

    view! {
        <div class="spinner" style=style></div>
    }
}

/// The page's loading indicator: a spinner with a label, hidden unless
/// `visible` is set.
#[component]

pub fn LoadingIndicator(
    /// Whether the indicator is shown.
    #[prop(into)]
    visible: Signal<bool>,
    /// Label shown next to the spinner.
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    view! {
        <div
            id="loading"
            class="loading-indicator"
            hidden=move || !visible.get()
            aria-busy=move || visible.get().to_string()
            data-testid="loading"
        >
            <Spinner size=24 />
            {label.map(|text| {
                view! {
                    <span class="loading-indicator-label">{text}</span>
                }
            })}
        </div>
    }
}
