use contracts::domain::production::ProductionSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::production::api;
use crate::shared::components::show_more::ShowMoreControl;
use crate::shared::components::stat_card::StatCard;
use crate::shared::display_window::DisplayWindow;
use crate::shared::format_utils::{format_kg, format_number_with_decimals};

/// Bar height in percent, scaled against the tallest visible bar.
fn bar_percent(value: i64, max: i64) -> f64 {
    if max <= 0 {
        0.0
    } else {
        value as f64 * 100.0 / max as f64
    }
}

/// Landing dashboard: totals plus production volume by period.
#[component]
pub fn SupplyOverview() -> impl IntoView {
    let (summary, set_summary) = signal(None::<ProductionSummary>);
    let (error, set_error) = signal(None::<String>);
    let window = RwSignal::new(DisplayWindow::new());

    Effect::new(move || {
        spawn_local(async move {
            match api::summary().await {
                Ok(data) => set_summary.set(Some(data)),
                Err(e) => set_error.set(Some(e.user_message())),
            }
        });
    });

    let points_len = Signal::derive(move || {
        summary.get().map(|s| s.by_period.len()).unwrap_or_default()
    });

    view! {
        <div class="page">
            <h1 class="page__title">"Supply overview"</h1>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {move || summary.get().map(|s| {
                let total = s.total_quantity_kg;
                let batches = s.batch_count;
                let suppliers = s.active_suppliers;
                let open_orders = s.open_orders;
                view! {
                    <div class="stat-grid">
                        <StatCard
                            title="Total production"
                            value=Signal::derive(move || format_kg(total))
                        />
                        <StatCard
                            title="Batches"
                            value=Signal::derive(move || {
                                format_number_with_decimals(batches as f64, 0)
                            })
                        />
                        <StatCard
                            title="Active suppliers"
                            value=Signal::derive(move || {
                                format_number_with_decimals(suppliers as f64, 0)
                            })
                        />
                        <StatCard
                            title="Open orders"
                            value=Signal::derive(move || {
                                format_number_with_decimals(open_orders as f64, 0)
                            })
                        />
                    </div>
                }
            })}

            {move || summary.get().map(|s| {
                let visible = window.get().visible(s.by_period.len());
                let shown = &s.by_period[..visible];
                let max = shown.iter().map(|p| p.quantity_kg).max().unwrap_or(0);
                let bars = shown
                    .iter()
                    .map(|point| {
                        let height = bar_percent(point.quantity_kg, max);
                        let title = format!("{}: {}", point.period, format_kg(point.quantity_kg));
                        view! {
                            <div class="bar-chart__item" title=title>
                                <div
                                    class="bar-chart__bar"
                                    style=format!("height: {:.1}%", height)
                                ></div>
                                <span class="bar-chart__label">{point.period.clone()}</span>
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="panel">
                        <h2 class="panel__title">"Production by period"</h2>
                        <div class="bar-chart">{bars}</div>
                    </div>
                }
            })}

            <ShowMoreControl window=window len=points_len />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_against_the_maximum() {
        assert_eq!(bar_percent(50, 100), 50.0);
        assert_eq!(bar_percent(100, 100), 100.0);
        assert_eq!(bar_percent(0, 100), 0.0);
    }

    #[test]
    fn empty_chart_has_no_division_by_zero() {
        assert_eq!(bar_percent(10, 0), 0.0);
    }
}
