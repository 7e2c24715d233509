//! Topic form with the submit button.

use leptos::html::Input;
use leptos::prelude::*;

use crate::view::SignalView;

/// Hand the raw input text to `on_submit`. An unmounted input counts as empty
/// so the controller still reports the validation error.
fn forward_topic(value: Option<String>, on_submit: Callback<String>) {
    on_submit.run(value.unwrap_or_default());
}

/// The topic form.
///
/// Submitting never navigates; the raw input text goes to `on_submit` and the
/// controller decides what to do with it.
#[component]

pub fn GenerateForm(
    /// Handles shared with the controller.
    handles: SignalView,
    /// Called with the untrimmed topic text on submit.
    on_submit: Callback<String>,
) -> impl IntoView {
    let topic_input = NodeRef::<Input>::new();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        forward_topic(topic_input.get_untracked().map(|input| input.value()), on_submit);
    };

    view! {
        <form id="video-form" class="generate-form" on:submit=handle_submit>
            <label for="topic" class="form-label">"Topic"</label>
            <input
                id="topic"
                name="topic"
                type="text"
                class="form-input"
                placeholder="e.g. The history of the Roman Empire"
                autocomplete="off"
                node_ref=topic_input
                data-testid="topic-input"
            />
            <button
                id="generate-btn"
                type="submit"
                class="btn btn-primary"
                disabled=move || !handles.submit_enabled.get()
                data-testid="generate-btn"
            >
                {move || handles.submit_label.get()}
            </button>
        </form>
    }
}
