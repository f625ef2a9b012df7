use contracts::domain::order::{Order, OrderStatus, PaymentStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::api;
use crate::shared::components::show_more::ShowMoreControl;
use crate::shared::components::toast::use_toasts;
use crate::shared::components::ui::Select;
use crate::shared::display_window::DisplayWindow;
use crate::shared::form::SubmissionGate;
use crate::shared::format_utils::{format_datetime, format_kg, format_money};

/// One order row with inline status/payment editing. Each row owns its
/// own submission gate, so updating one order never blocks another and
/// a double change on the same row is refused while in flight.
#[component]
fn OrderRow(order: Order) -> impl IntoView {
    let toasts = use_toasts();
    let gate = SubmissionGate::new();

    let id = order.id;
    let status = RwSignal::new(order.status);
    let payment = RwSignal::new(order.payment_status);

    let on_status_change = Callback::new(move |value: String| {
        let Some(next) = OrderStatus::from_str_loose(&value) else {
            return;
        };
        let previous = status.get_untracked();
        if next == previous || !gate.try_begin(&[]) {
            return;
        }
        status.set(next);
        spawn_local(async move {
            match api::update_status(id, next).await {
                Ok(updated) => {
                    if gate.settle(true) {
                        status.set(updated.status);
                        toasts.success("Order status updated");
                    }
                }
                Err(e) => {
                    if gate.settle(false) {
                        status.set(previous);
                        toasts.error(e.user_message());
                    }
                }
            }
        });
    });

    let on_payment_change = Callback::new(move |value: String| {
        let Some(next) = PaymentStatus::from_str_loose(&value) else {
            return;
        };
        let previous = payment.get_untracked();
        if next == previous || !gate.try_begin(&[]) {
            return;
        }
        payment.set(next);
        spawn_local(async move {
            match api::update_payment(id, next).await {
                Ok(updated) => {
                    if gate.settle(true) {
                        payment.set(updated.payment_status);
                        toasts.success("Payment status updated");
                    }
                }
                Err(e) => {
                    if gate.settle(false) {
                        payment.set(previous);
                        toasts.error(e.user_message());
                    }
                }
            }
        });
    });

    let busy = Signal::derive(move || gate.status.get().is_submitting());
    let status_options: Vec<(String, String)> = OrderStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();
    let payment_options: Vec<(String, String)> = PaymentStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    view! {
        <tr>
            <td>{order.supplier_name.clone()}</td>
            <td class="num">{format_kg(order.quantity_kg)}</td>
            <td class="num">{format_money(order.amount)}</td>
            <td>{format_datetime(order.placed_at)}</td>
            <td>
                <Select
                    value=Signal::derive(move || status.get().as_str().to_string())
                    on_change=on_status_change
                    options=status_options
                    disabled=busy
                />
            </td>
            <td>
                <Select
                    value=Signal::derive(move || payment.get().as_str().to_string())
                    on_change=on_payment_change
                    options=payment_options
                    disabled=busy
                />
            </td>
        </tr>
    }
}

#[component]
pub fn OrdersList() -> impl IntoView {
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let window = RwSignal::new(DisplayWindow::new());

    Effect::new(move || {
        spawn_local(async move {
            match api::list().await {
                Ok(data) => set_orders.set(data),
                Err(e) => set_error.set(Some(e.user_message())),
            }
            set_loading.set(false);
        });
    });

    let len = Signal::derive(move || orders.get().len());

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Purchase orders"</h1>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || loading.get()>
                <p class="loading">"Loading orders..."</p>
            </Show>

            <Show when=move || !loading.get() && error.get().is_none()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Supplier"</th>
                            <th>"Quantity"</th>
                            <th>"Amount"</th>
                            <th>"Placed"</th>
                            <th>"Status"</th>
                            <th>"Payment"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || {
                                let all = orders.get();
                                let visible = window.get().visible(all.len());
                                all.into_iter().take(visible).collect::<Vec<_>>()
                            }
                            key=|order| order.id
                            children=move |order| view! { <OrderRow order=order /> }
                        />
                    </tbody>
                </table>
                <ShowMoreControl window=window len=len />
            </Show>
        </div>
    }
}
