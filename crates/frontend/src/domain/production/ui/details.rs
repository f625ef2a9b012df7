use contracts::domain::production::NewProductionBatch;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::production::api;
use crate::shared::components::toast::use_toasts;
use crate::shared::components::ui::{FieldInput, SubmitButton};
use crate::shared::form::{validation, FormField, SubmissionGate};

/// Entry form for a new production batch.
#[component]
pub fn ProductionDetails() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();

    let tea_grade = FormField::new(validation::required);
    let quantity = FormField::new(validation::quantity_kg);
    let produced_on = FormField::new(validation::iso_date);
    let line = FormField::new(validation::required);
    let notes = FormField::new(validation::optional);
    let gate = SubmissionGate::new();

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if !gate.try_begin(&[tea_grade, quantity, produced_on, line]) {
                return;
            }

            let notes_val = notes.get();
            let batch = NewProductionBatch {
                tea_grade: tea_grade.get(),
                quantity_kg: quantity.get().trim().parse().unwrap_or_default(),
                produced_on: produced_on.get(),
                line: line.get(),
                notes: if notes_val.trim().is_empty() {
                    None
                } else {
                    Some(notes_val)
                },
            };
            // Final check on the typed payload before it goes out.
            if let Err(msg) = batch.validate() {
                gate.abort();
                toasts.error(msg);
                return;
            }
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::create(&batch).await {
                    Ok(_) => {
                        if gate.settle(true) {
                            toasts.success("Production batch recorded");
                            navigate("/production", Default::default());
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
        move |_| navigate("/production", Default::default())
    };

    view! {
        <div class="page page--narrow">
            <h1 class="page__title">"Record production batch"</h1>

            <form on:submit=on_submit>
                <FieldInput field=tea_grade label="Tea grade" placeholder="e.g. BOP" />
                <FieldInput field=quantity label="Quantity (kg)" />
                <FieldInput field=produced_on label="Production date" input_type="date" />
                <FieldInput field=line label="Processing line" placeholder="e.g. CTC-2" />
                <FieldInput field=notes label="Notes (optional)" />

                <div class="form__actions">
                    <SubmitButton gate=gate label="Record" busy_label="Recording..." />
                    <button type="button" class="btn btn--secondary" on:click=cancel>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
