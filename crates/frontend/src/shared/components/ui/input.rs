use leptos::prelude::*;

use crate::shared::form::FormField;

/// Labeled input bound to a [`FormField`]: keystrokes go through the
/// debounced validator, blur validates immediately, and the field's
/// inline error renders underneath.
#[component]
pub fn FieldInput(
    /// The form field driving this input.
    field: FormField,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", "date", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || {
                    if field.error.get().is_some() {
                        "form__input form__input--invalid"
                    } else {
                        "form__input"
                    }
                }
                type=input_t
                prop:value=move || field.value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| field.input(event_target_value(&ev))
                on:blur=move |_| field.blur()
            />
            {move || field.error.get().map(|e| view! {
                <span class="form__error">{e}</span>
            })}
        </div>
    }
}
