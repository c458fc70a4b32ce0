use crate::{
    api::RecentList,
    components::layout::Panel,
    pages::dashboard::{
        utils::{format_percent, progress_width, ProgressStyle, StatusBadge},
        view_model::DashboardState,
    },
};
use leptos::*;

#[component]
pub fn RecentListsSection(state: RwSignal<DashboardState>) -> impl IntoView {
    let lists = move || state.with(|s| s.snapshot.as_ref().and_then(|d| d.recent_lists.clone()));

    view! {
        <Panel title="Recent lists" subtitle="Latest shopping lists and their progress">
            <div class="recent-lists-container">
                {move || lists().map(|lists| {
                    if lists.is_empty() {
                        view! { <p class="text-sm text-fg-muted">{"No shopping lists yet."}</p> }.into_view()
                    } else {
                        lists.into_iter().map(|list| view! { <RecentListRow list=list /> }).collect_view()
                    }
                })}
            </div>
        </Panel>
    }
}

#[component]
fn RecentListRow(list: RecentList) -> impl IntoView {
    let badge = StatusBadge::for_state(&list.state);
    let progress = ProgressStyle::for_rate(list.completion_rate);
    let width = format!("width: {}%;", progress_width(list.completion_rate));

    view! {
        <div class="mb-3">
            <div class="flex justify-between items-center">
                <span class="font-bold text-fg">{list.name}</span>
                <span class=format!("px-2 py-0.5 rounded-full text-xs font-semibold {}", badge.css_class())>
                    {list.state.to_string()}
                </span>
            </div>
            <div class="mt-1 h-4 w-full rounded bg-surface-muted overflow-hidden">
                <div
                    class=format!("h-4 text-xs text-text-inverse text-center {}", progress.css_class())
                    style=width
                >
                    {format_percent(list.completion_rate)}
                </div>
            </div>
        </div>
    }
}
