use leptos::prelude::*;

use crate::shared::display_window::DisplayWindow;

/// Toggle under a windowed list: "Show more" while records are hidden,
/// "Show less" once everything is visible. Renders nothing when the
/// whole sequence fits in the default window.
#[component]
pub fn ShowMoreControl(
    window: RwSignal<DisplayWindow>,
    /// Length of the underlying sequence
    #[prop(into)]
    len: Signal<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || window.get().needs_control(len.get())>
            <button
                class="btn btn--link show-more"
                on:click=move |_| window.update(|w| w.advance(len.get_untracked()))
            >
                {move || {
                    if window.get().has_more(len.get()) {
                        "Show more"
                    } else {
                        "Show less"
                    }
                }}
            </button>
        </Show>
    }
}
