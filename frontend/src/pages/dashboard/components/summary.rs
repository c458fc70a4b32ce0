use crate::pages::dashboard::{
    utils::{format_amount, format_count, format_percent},
    view_model::DashboardState,
};
use leptos::*;

#[component]
pub fn SummarySection(state: RwSignal<DashboardState>) -> impl IntoView {
    let stat = move |f: fn(&DashboardState) -> String| {
        move || state.with(|s| f(s))
    };

    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <Metric
                label="Total lists"
                target="total-lists"
                value=Signal::derive(stat(|s| format_count(s.snapshot.as_ref().map_or(0, |d| d.total_lists))))
            />
            <Metric
                label="Bought items"
                target="bought-items"
                value=Signal::derive(stat(|s| format_count(s.snapshot.as_ref().map_or(0, |d| d.bought_items))))
            />
            <Metric
                label="Used budget"
                target="used-budget"
                value=Signal::derive(stat(|s| format_amount(s.snapshot.as_ref().map_or(0.0, |d| d.used_budget))))
            />
            <Metric
                label="Average completion"
                target="avg-completion"
                value=Signal::derive(stat(|s| format_percent(s.snapshot.as_ref().map_or(0.0, |d| d.avg_completion))))
            />
        </div>
    }
}

/// Active budget totals; rendered only when the payload carries them.
#[component]
pub fn BudgetSection(state: RwSignal<DashboardState>) -> impl IntoView {
    let budget = move || state.with(|s| s.snapshot.as_ref().and_then(|d| d.budget_stats));

    move || {
        budget().map(|b| {
            view! {
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                    <Metric label="Budget" target="total-budget" value=Signal::derive(move || format_amount(b.total_budget)) />
                    <Metric label="Spent" target="budget-used" value=Signal::derive(move || format_amount(b.budget_used)) />
                    <Metric label="Remaining" target="budget-remaining" value=Signal::derive(move || format_amount(b.budget_remaining)) />
                </div>
            }
        })
    }
}

#[component]
fn Metric(
    #[prop(into)] label: String,
    target: &'static str,
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden p-6 rounded-2xl bg-surface-elevated border border-border shadow-premium">
            <p class="text-xs font-display font-bold text-brand-600 uppercase tracking-widest">{label}</p>
            <p class=format!("mt-3 text-3xl font-display font-extrabold text-fg {}", target)>{move || value.get()}</p>
        </div>
    }
}
