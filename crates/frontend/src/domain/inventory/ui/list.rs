use contracts::domain::inventory::InventoryItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::inventory::api;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::show_more::ShowMoreControl;
use crate::shared::display_window::DisplayWindow;
use crate::shared::format_utils::{format_datetime, format_kg, format_money};

fn matches_filter(item: &InventoryItem, filter: &str) -> bool {
    if filter.trim().is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    item.name.to_lowercase().contains(&needle)
        || item.grade.to_lowercase().contains(&needle)
        || item.warehouse.to_lowercase().contains(&needle)
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (filter, set_filter) = signal(String::new());
    let window = RwSignal::new(DisplayWindow::new());

    Effect::new(move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::list().await {
                Ok(data) => set_items.set(data),
                Err(e) => set_error.set(Some(e.user_message())),
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        let needle = filter.get();
        items
            .get()
            .into_iter()
            .filter(|item| matches_filter(item, &needle))
            .collect::<Vec<_>>()
    });
    let filtered_len = Signal::derive(move || filtered.get().len());

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Inventory"</h1>
                <SearchInput
                    on_change=Callback::new(move |q| {
                        set_filter.set(q);
                        window.set(DisplayWindow::new());
                    })
                    placeholder="Search name, grade or warehouse..."
                />
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || loading.get()>
                <p class="loading">"Loading inventory..."</p>
            </Show>

            <Show when=move || !loading.get() && error.get().is_none()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Grade"</th>
                            <th>"Quantity"</th>
                            <th>"Unit price"</th>
                            <th>"Warehouse"</th>
                            <th>"Updated"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || {
                                let all = filtered.get();
                                let visible = window.get().visible(all.len());
                                all.into_iter().take(visible).collect::<Vec<_>>()
                            }
                            key=|item| item.id
                            children=move |item| {
                                let href = format!("/inventory/{}", item.id);
                                view! {
                                    <tr>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.grade.clone()}</td>
                                        <td class="num">{format_kg(item.quantity_kg)}</td>
                                        <td class="num">{format_money(item.unit_price)}</td>
                                        <td>{item.warehouse.clone()}</td>
                                        <td>{format_datetime(item.updated_at)}</td>
                                        <td><A href=href>"Edit"</A></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <ShowMoreControl window=window len=filtered_len />
            </Show>
        </div>
    }
}
