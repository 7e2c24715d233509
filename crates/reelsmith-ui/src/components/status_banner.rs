//! Status area showing the latest message with its severity class.

use leptos::prelude::*;
use reelsmith_core::StatusMessage;

use crate::view::status_class;

/// Status line. Renders nothing visible until the first message arrives.
#[component]

pub fn StatusBanner(
    /// Current status message.
    #[prop(into)]
    status: Signal<Option<StatusMessage>>,
) -> impl IntoView {
    view! {
        <div
            id="status"
            class=move || status.with(|s| status_class(s.as_ref()))
            role="status"
            aria-live="polite"
            data-severity=move || status.with(|s| s.as_ref().map(|m| m.severity.to_string()))
            data-testid="status"
        >
            {move || status.with(|s| s.as_ref().map(|m| m.text.clone()).unwrap_or_default())}
        </div>
    }
}
