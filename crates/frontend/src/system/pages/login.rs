use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::shared::components::ui::{FieldInput, SubmitButton};
use crate::shared::form::{validation, FormField, SubmissionGate};
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = FormField::new(validation::required);
    let password = FormField::new(validation::required);
    let gate = SubmissionGate::new();
    let (error_message, set_error_message) = signal(None::<String>);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !gate.try_begin(&[username, password]) {
            return;
        }
        set_error_message.set(None);

        let username_val = username.get();
        let password_val = password.get();
        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    storage::save_token(&response.token);
                    if gate.settle(true) {
                        password.clear();
                        set_auth_state.set(AuthState {
                            token: Some(response.token),
                            user: Some(response.user),
                        });
                    }
                }
                Err(e) => {
                    if gate.settle(false) {
                        set_error_message.set(Some(e.user_message()));
                    }
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Chaiwala Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <FieldInput
                        field=username
                        id="username"
                        label="Username"
                        placeholder="username"
                        disabled=Signal::derive(move || gate.status.get().is_submitting())
                    />
                    <FieldInput
                        field=password
                        id="password"
                        label="Password"
                        input_type="password"
                        disabled=Signal::derive(move || gate.status.get().is_submitting())
                    />

                    <SubmitButton gate=gate label="Sign in" busy_label="Signing in..." />
                </form>

                <div class="login-info">
                    <A href="/reset-password">"Forgot password?"</A>
                </div>
            </div>
        </div>
    }
}
