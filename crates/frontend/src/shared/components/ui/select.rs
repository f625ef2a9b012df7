use leptos::prelude::*;

/// Plain labeled select over `(value, label)` pairs.
#[component]
pub fn Select(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change handler
    on_change: Callback<String>,
    /// Available options as (value, label) pairs
    options: Vec<(String, String)>,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <select
                class="form__select"
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                {options.iter().map(|(val, text)| {
                    let val = val.clone();
                    let val_attr = val.clone();
                    view! {
                        <option value=val_attr selected=move || value.get() == val>
                            {text.clone()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
