use contracts::system::auth::ProfileUpdate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::toast::use_toasts;
use crate::shared::components::ui::{FieldInput, SubmitButton};
use crate::shared::form::{validation, FormField, SubmissionGate};
use crate::system::auth::api;
use crate::system::auth::context::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let toasts = use_toasts();
    let (_, set_auth_state) = use_auth();

    let username = FormField::new(validation::required);
    let email = FormField::new(validation::email);
    let gate = SubmissionGate::new();
    let (load_error, set_load_error) = signal(None::<String>);

    // Prefill from the server.
    Effect::new(move || {
        spawn_local(async move {
            match api::get_profile().await {
                Ok(user) => {
                    username.prefill(user.username);
                    email.prefill(user.email);
                }
                Err(e) => set_load_error.set(Some(e.user_message())),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !gate.try_begin(&[username, email]) {
            return;
        }
        let update = ProfileUpdate {
            username: username.get(),
            email: email.get(),
        };
        spawn_local(async move {
            match api::update_profile(&update).await {
                Ok(user) => {
                    if gate.settle(true) {
                        set_auth_state.update(|s| s.user = Some(user));
                        toasts.success("Profile updated");
                    }
                }
                Err(e) => {
                    if gate.settle(false) {
                        toasts.error(e.user_message());
                    }
                }
            }
        });
    };

    view! {
        <div class="page page--narrow">
            <h1 class="page__title">"My profile"</h1>

            <Show when=move || load_error.get().is_some()>
                <div class="error-message">{move || load_error.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                <FieldInput field=username label="Username" />
                <FieldInput field=email label="Email" />
                <SubmitButton gate=gate label="Save changes" busy_label="Saving..." />
            </form>
        </div>
    }
}
