use leptos::prelude::*;

use crate::shared::form::{SubmissionGate, SubmissionStatus};

/// Submit button wired to a [`SubmissionGate`]: disabled while a
/// request is in flight, with a spinner label.
#[component]
pub fn SubmitButton(
    gate: SubmissionGate,
    /// Idle label, e.g. "Save"
    #[prop(into)]
    label: String,
    /// Label while submitting, e.g. "Saving..."
    #[prop(into)]
    busy_label: String,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn btn--primary"
            disabled=move || gate.status.get().is_submitting()
        >
            {move || match gate.status.get() {
                SubmissionStatus::Submitting => busy_label.clone(),
                _ => label.clone(),
            }}
        </button>
    }
}
