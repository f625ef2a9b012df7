use contracts::domain::supplier::SupplierInput;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use uuid::Uuid;

use crate::domain::suppliers::api;
use crate::shared::components::toast::use_toasts;
use crate::shared::components::ui::{FieldInput, SubmitButton};
use crate::shared::form::{validation, FormField, SubmissionGate};

/// Create/edit form for a supplier. With an `:id` route param the form
/// is prefilled and saves with PUT; without one it creates with POST.
#[component]
pub fn SupplierDetails() -> impl IntoView {
    let params = use_params_map();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let name = FormField::new(validation::required);
    let contact_name = FormField::new(validation::optional);
    let email = FormField::new(validation::email);
    let phone = FormField::new(validation::phone);
    let region = FormField::new(validation::optional);
    let active = RwSignal::new(true);
    let gate = SubmissionGate::new();

    let (load_error, set_load_error) = signal(None::<String>);

    let supplier_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| Uuid::parse_str(&raw).ok()))
    });
    let is_edit = move || supplier_id.get().is_some();

    Effect::new(move || {
        let Some(id) = supplier_id.get() else {
            return;
        };
        spawn_local(async move {
            match api::get(id).await {
                Ok(supplier) => {
                    name.prefill(supplier.name);
                    contact_name.prefill(supplier.contact_name);
                    email.prefill(supplier.email);
                    phone.prefill(supplier.phone);
                    region.prefill(supplier.region);
                    active.set(supplier.active);
                }
                Err(e) => set_load_error.set(Some(e.user_message())),
            }
        });
    });

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if !gate.try_begin(&[name, email, phone]) {
                return;
            }

            let input = SupplierInput {
                name: name.get(),
                contact_name: contact_name.get(),
                email: email.get(),
                phone: phone.get(),
                region: region.get(),
                active: active.get_untracked(),
            };
            // Final check on the typed payload before it goes out.
            if let Err(msg) = input.validate() {
                gate.abort();
                toasts.error(msg);
                return;
            }
            let id = supplier_id.get_untracked();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = match id {
                    Some(id) => api::update(id, &input).await,
                    None => api::create(&input).await,
                };
                match result {
                    Ok(_) => {
                        if gate.settle(true) {
                            toasts.success(if id.is_some() {
                                "Supplier updated"
                            } else {
                                "Supplier added"
                            });
                            navigate("/suppliers", Default::default());
                        }
                    }
                    Err(e) => {
                        if gate.settle(false) {
                            toasts.error(e.user_message());
                        }
                    }
                }
            });
        }
    };

    let cancel = {
        let navigate = navigate.clone();
        move |_| navigate("/suppliers", Default::default())
    };

    view! {
        <div class="page page--narrow">
            <h1 class="page__title">
                {move || if is_edit() { "Edit supplier" } else { "New supplier" }}
            </h1>

            <Show when=move || load_error.get().is_some()>
                <div class="error-message">{move || load_error.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                <FieldInput field=name label="Supplier name" />
                <FieldInput field=contact_name label="Contact person" />
                <FieldInput field=email label="Email" />
                <FieldInput field=phone label="Phone" />
                <FieldInput field=region label="Region" />

                <div class="form__group form__group--inline">
                    <label class="form__label">
                        <input
                            type="checkbox"
                            prop:checked=move || active.get()
                            on:change=move |ev| active.set(event_target_checked(&ev))
                        />
                        " Active supplier"
                    </label>
                </div>

                <div class="form__actions">
                    <SubmitButton gate=gate label="Save" busy_label="Saving..." />
                    <button type="button" class="btn btn--secondary" on:click=cancel>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
