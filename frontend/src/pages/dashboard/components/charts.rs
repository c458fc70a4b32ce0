use crate::{components::layout::Panel, pages::dashboard::charts::ChartSlot};
use leptos::*;

/// Canvases the chart renderer draws into. They are always present so a
/// redraw never waits on the DOM.
#[component]
pub fn ChartsSection(available: bool) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {(!available).then(|| view! {
                <p class="text-sm text-fg-muted">{"Charts are unavailable: the charting library is not loaded."}</p>
            })}
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                {ChartSlot::ALL
                    .into_iter()
                    .map(|slot| view! {
                        <Panel title=slot.title()>
                            <canvas id=slot.target_id() class="w-full"></canvas>
                        </Panel>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
