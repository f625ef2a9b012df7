use contracts::system::auth::PaymentSessionStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::domain::orders::api;

/// Landing page after a payment-provider redirect: looks up the session
/// outcome and points back to the orders list.
#[component]
pub fn PaymentResultPage() -> impl IntoView {
    let params = use_params_map();
    let session_id = move || params.with(|p| p.get("session_id").unwrap_or_default());

    let (status, set_status) = signal(None::<PaymentSessionStatus>);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);

    Effect::new(move || {
        let id = session_id();
        spawn_local(async move {
            match api::payment_status(&id).await {
                Ok(s) => set_status.set(Some(s)),
                Err(e) => set_error.set(Some(e.user_message())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page page--narrow">
            <h1 class="page__title">"Payment status"</h1>

            <Show when=move || loading.get()>
                <p class="loading">"Checking payment..."</p>
            </Show>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {move || status.get().map(|s| {
                let badge = match s.state.as_str() {
                    "paid" => ("badge badge--success", "Paid"),
                    "failed" => ("badge badge--danger", "Failed"),
                    _ => ("badge badge--secondary", "Processing"),
                };
                view! {
                    <div class="payment-result">
                        <span class=badge.0>{badge.1}</span>
                        <p>"Session " <code>{s.session_id.clone()}</code></p>
                        <p>"Order " <code>{s.order_id.to_string()}</code></p>
                    </div>
                }
            })}

            <A href="/orders">"Back to orders"</A>
        </div>
    }
}
