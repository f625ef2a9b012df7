use contracts::system::auth::ResetPasswordRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::components::toast::use_toasts;
use crate::shared::components::ui::{FieldInput, SubmitButton};
use crate::shared::form::{validation, FormField, SubmissionGate};
use crate::system::auth::api;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    RequestOtp,
    ConfirmReset,
}

/// Two-step password reset: request an OTP by email, then redeem it
/// together with the new password pair.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (step, set_step) = signal(Step::RequestOtp);

    let email = FormField::new(validation::email);
    let otp = FormField::new(validation::otp_code);
    let new_password = FormField::new(validation::password);
    let confirm_password = FormField::new(validation::password);
    let gate = SubmissionGate::new();

    let on_request_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !gate.try_begin(&[email]) {
            return;
        }
        let email_val = email.get();
        spawn_local(async move {
            match api::send_otp(email_val).await {
                Ok(message) => {
                    if gate.settle(true) {
                        toasts.success(
                            message.unwrap_or_else(|| "OTP sent to your email".to_string()),
                        );
                        set_step.set(Step::ConfirmReset);
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

    let on_confirm = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if !gate.try_begin(&[otp, new_password, confirm_password]) {
                return;
            }
            if let Some(msg) =
                validation::passwords_match(&new_password.get(), &confirm_password.get())
            {
                confirm_password.error.set(Some(msg));
                gate.abort();
                return;
            }

            let request = ResetPasswordRequest {
                email: email.get(),
                otp: otp.get(),
                new_password: new_password.get(),
            };
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::reset_password(&request).await {
                    Ok(message) => {
                        if gate.settle(true) {
                            new_password.clear();
                            confirm_password.clear();
                            otp.clear();
                            toasts.success(
                                message.unwrap_or_else(|| "Password has been reset".to_string()),
                            );
                            navigate("/login", Default::default());
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

    let busy = Signal::derive(move || gate.status.get().is_submitting());

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Reset password"</h2>

                <Show
                    when=move || step.get() == Step::RequestOtp
                    fallback=move || view! {
                        <form on:submit=on_confirm.clone()>
                            <p class="form__hint">
                                "Enter the 6-digit code we sent to your email."
                            </p>
                            <FieldInput field=otp label="One-time code" placeholder="000000" disabled=busy />
                            <FieldInput
                                field=new_password
                                label="New password"
                                input_type="password"
                                disabled=busy
                            />
                            <FieldInput
                                field=confirm_password
                                label="Confirm new password"
                                input_type="password"
                                disabled=busy
                            />
                            <SubmitButton gate=gate label="Reset password" busy_label="Resetting..." />
                        </form>
                    }
                >
                    <form on:submit=on_request_otp>
                        <FieldInput
                            field=email
                            label="Email"
                            placeholder="you@example.com"
                            disabled=busy
                        />
                        <SubmitButton gate=gate label="Send code" busy_label="Sending..." />
                    </form>
                </Show>

                <div class="login-info">
                    <A href="/login">"Back to sign in"</A>
                </div>
            </div>
        </div>
    }
}
