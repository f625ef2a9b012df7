use contracts::domain::production::ProductionBatch;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::production::api;
use crate::shared::components::show_more::ShowMoreControl;
use crate::shared::display_window::DisplayWindow;
use crate::shared::format_utils::{format_date, format_kg};

#[component]
pub fn ProductionList() -> impl IntoView {
    let (batches, set_batches) = signal(Vec::<ProductionBatch>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let window = RwSignal::new(DisplayWindow::new());

    Effect::new(move || {
        spawn_local(async move {
            match api::list().await {
                Ok(data) => set_batches.set(data),
                Err(e) => set_error.set(Some(e.user_message())),
            }
            set_loading.set(false);
        });
    });

    let len = Signal::derive(move || batches.get().len());

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Production"</h1>
                <A href="/production/new" attr:class="btn btn--primary">"Record batch"</A>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || loading.get()>
                <p class="loading">"Loading production batches..."</p>
            </Show>

            <Show when=move || !loading.get() && error.get().is_none()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Grade"</th>
                            <th>"Quantity"</th>
                            <th>"Line"</th>
                            <th>"Notes"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || {
                                let all = batches.get();
                                let visible = window.get().visible(all.len());
                                all.into_iter().take(visible).collect::<Vec<_>>()
                            }
                            key=|batch| batch.id
                            children=move |batch| {
                                view! {
                                    <tr>
                                        <td>{format_date(batch.produced_on)}</td>
                                        <td>{batch.tea_grade.clone()}</td>
                                        <td class="num">{format_kg(batch.quantity_kg)}</td>
                                        <td>{batch.line.clone()}</td>
                                        <td>{batch.notes.clone().unwrap_or_default()}</td>
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
