use contracts::domain::supplier::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::suppliers::api;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::show_more::ShowMoreControl;
use crate::shared::display_window::DisplayWindow;

#[component]
pub fn SupplierList() -> impl IntoView {
    let (suppliers, set_suppliers) = signal(Vec::<Supplier>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    // Debounced search text; each change reloads from the server.
    let (query, set_query) = signal(String::new());
    let window = RwSignal::new(DisplayWindow::new());

    Effect::new(move || {
        let q = query.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::list(&q).await {
                Ok(data) => {
                    set_suppliers.set(data);
                    window.set(DisplayWindow::new());
                }
                Err(e) => set_error.set(Some(e.user_message())),
            }
            set_loading.set(false);
        });
    });

    let len = Signal::derive(move || suppliers.get().len());

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Suppliers"</h1>
                <SearchInput
                    on_change=Callback::new(move |q| set_query.set(q))
                    placeholder="Search suppliers..."
                />
                <A href="/suppliers/new" attr:class="btn btn--primary">"Add supplier"</A>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || loading.get()>
                <p class="loading">"Loading suppliers..."</p>
            </Show>

            <Show when=move || !loading.get() && error.get().is_none()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Contact"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Region"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || {
                                let all = suppliers.get();
                                let visible = window.get().visible(all.len());
                                all.into_iter().take(visible).collect::<Vec<_>>()
                            }
                            key=|s| s.id
                            children=move |s| {
                                let href = format!("/suppliers/{}", s.id);
                                let (badge_class, badge_text) = if s.active {
                                    ("badge badge--success", "Active")
                                } else {
                                    ("badge badge--secondary", "Inactive")
                                };
                                view! {
                                    <tr>
                                        <td>{s.name.clone()}</td>
                                        <td>{s.contact_name.clone()}</td>
                                        <td>{s.email.clone()}</td>
                                        <td>{s.phone.clone()}</td>
                                        <td>{s.region.clone()}</td>
                                        <td><span class=badge_class>{badge_text}</span></td>
                                        <td><A href=href>"Edit"</A></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <ShowMoreControl window=window len=len />
            </Show>
        </div>
    }
}
