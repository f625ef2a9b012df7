use contracts::domain::inventory::InventoryUpdate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use uuid::Uuid;

use crate::domain::inventory::api;
use crate::shared::components::toast::use_toasts;
use crate::shared::components::ui::{FieldInput, SubmitButton};
use crate::shared::form::{validation, FormField, SubmissionGate};

/// Edit form for one inventory record: prefilled from the server,
/// quantity and price validated with the debounced rules, saved with a
/// single-flight PUT.
#[component]
pub fn InventoryDetails() -> impl IntoView {
    let params = use_params_map();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let name = FormField::new(validation::required);
    let grade = FormField::new(validation::required);
    let quantity = FormField::new(validation::quantity_kg);
    let unit_price = FormField::new(validation::unit_price);
    let warehouse = FormField::new(validation::required);
    let gate = SubmissionGate::new();

    let (load_error, set_load_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);

    let item_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| Uuid::parse_str(&raw).ok()))
    });

    Effect::new(move || {
        let Some(id) = item_id.get() else {
            set_load_error.set(Some("Invalid inventory id".to_string()));
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            match api::get(id).await {
                Ok(item) => {
                    name.prefill(item.name);
                    grade.prefill(item.grade);
                    quantity.prefill(item.quantity_kg.to_string());
                    unit_price.prefill(format!("{:.2}", item.unit_price));
                    warehouse.prefill(item.warehouse);
                }
                Err(e) => set_load_error.set(Some(e.user_message())),
            }
            set_loading.set(false);
        });
    });

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(id) = item_id.get_untracked() else {
                return;
            };
            if !gate.try_begin(&[name, grade, quantity, unit_price, warehouse]) {
                return;
            }

            let update = InventoryUpdate {
                name: name.get(),
                grade: grade.get(),
                quantity_kg: quantity.get().trim().parse().unwrap_or_default(),
                unit_price: unit_price.get().trim().parse().unwrap_or_default(),
                warehouse: warehouse.get(),
            };
            // Final check on the typed payload before it goes out.
            if let Err(msg) = update.validate() {
                gate.abort();
                toasts.error(msg);
                return;
            }
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::update(id, &update).await {
                    Ok(_) => {
                        if gate.settle(true) {
                            toasts.success("Inventory updated");
                            navigate("/inventory", Default::default());
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
        move |_| navigate("/inventory", Default::default())
    };

    view! {
        <div class="page page--narrow">
            <h1 class="page__title">"Edit inventory"</h1>

            <Show when=move || load_error.get().is_some()>
                <div class="error-message">{move || load_error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>

            <Show when=move || !loading.get() && load_error.get().is_none()>
                <form on:submit=on_submit.clone()>
                    <FieldInput field=name label="Name" />
                    <FieldInput field=grade label="Grade" placeholder="e.g. FTGFOP1" />
                    <FieldInput field=quantity label="Quantity (kg)" />
                    <FieldInput field=unit_price label="Unit price" />
                    <FieldInput field=warehouse label="Warehouse" />

                    <div class="form__actions">
                        <SubmitButton gate=gate label="Save" busy_label="Saving..." />
                        <button type="button" class="btn btn--secondary" on:click=cancel.clone()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
