//! Four headline tiles above the tabs.

use leptos::prelude::*;
use tickets::DeskMetrics;

use crate::state::desk::DeskState;
use crate::util::clock;

#[cfg(test)]
#[path = "metrics_bar_test.rs"]
mod metrics_bar_test;

/// One tile's text content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: String,
    pub hint: &'static str,
}

pub fn metric_tiles(m: &DeskMetrics) -> [MetricTile; 4] {
    [
        MetricTile { label: "Açık İş Emri", value: m.open.to_string(), hint: "Teslim edilmemiş" },
        MetricTile { label: "Bugün Teslim", value: m.due_today.to_string(), hint: "Tahmini tarihi gelen" },
        MetricTile { label: "Parça Bekleyen", value: m.awaiting_parts.to_string(), hint: "Tedarik sürecinde" },
        MetricTile { label: "Teslime Hazır", value: m.ready.to_string(), hint: "Müşteri bekleniyor" },
    ]
}

#[component]
pub fn MetricsBar() -> impl IntoView {
    let desk = expect_context::<RwSignal<DeskState>>();
    let metrics = Memo::new(move |_| desk.with(|d| d.metrics(clock::today())));

    view! {
        <section class="metrics-bar">
            {move || {
                let m = metrics.get();
                let pct = m.open_ratio_percent();
                metric_tiles(&m)
                    .into_iter()
                    .enumerate()
                    .map(|(i, tile)| {
                        view! {
                            <div class="metric-tile">
                                <div class="metric-tile__label">{tile.label}</div>
                                <div class="metric-tile__value">{tile.value}</div>
                                {if i == 0 {
                                    view! {
                                        <div class="progress">
                                            <div class="progress__fill" style=format!("width: {pct}%")></div>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! { <div class="metric-tile__hint">{tile.hint}</div> }.into_any()
                                }}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}
