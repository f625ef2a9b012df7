use leptos::prelude::*;

use crate::shared::form::Debounce;

/// Delay before a search box publishes its value.
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Search box with debounce and a clear button. The `on_change`
/// callback fires once per pause in typing, not per keystroke.
#[component]
pub fn SearchInput(
    /// Callback receiving the debounced filter text
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    // Local state for the input itself (ahead of the debounce).
    let (input_value, set_input_value) = signal(String::new());
    let debounce = Debounce::new(SEARCH_DEBOUNCE_MS);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debounce.schedule(move || on_change.run(new_value));
    };

    let clear = move |_| {
        debounce.cancel();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="form__input"
                placeholder=move || placeholder.get().unwrap_or_else(|| "Search...".to_string())
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    "×"
                </button>
            </Show>
        </div>
    }
}
