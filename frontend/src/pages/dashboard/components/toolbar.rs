use crate::{
    components::layout::LoadingSpinner,
    pages::dashboard::{
        utils::format_last_updated,
        view_model::{log_load_outcome, DashboardController},
    },
};
use leptos::*;

#[component]
pub fn DashboardToolbar(controller: DashboardController) -> impl IntoView {
    let state = controller.state;
    let loading = move || state.with(|s| s.loading);
    let last_updated = move || {
        state.with(|s| {
            s.last_updated
                .as_ref()
                .map(|at| format!("Updated {}", format_last_updated(at)))
        })
    };

    let on_refresh = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                log_load_outcome("refresh", controller.refresh().await);
            });
        }
    };
    let on_new_list = {
        let controller = controller.clone();
        move |_| controller.open_new_list()
    };
    let on_budget_report = {
        let controller = controller.clone();
        move |_| controller.open_budget_report()
    };
    let on_update_prices = move |_| controller.open_update_prices();

    view! {
        <div class="flex flex-wrap items-center gap-2">
            <Show when=loading fallback=|| ()>
                <LoadingSpinner />
            </Show>
            <span class="text-xs text-fg-muted">{last_updated}</span>
            <button type="button" class="btn-secondary o_shopping_refresh" on:click=on_refresh>
                {"Refresh"}
            </button>
            <button type="button" class="btn-primary o_shopping_new_list" on:click=on_new_list>
                {"New list"}
            </button>
            <button type="button" class="btn-secondary o_shopping_budget_report" on:click=on_budget_report>
                {"Budget report"}
            </button>
            <button type="button" class="btn-secondary o_shopping_update_prices" on:click=on_update_prices>
                {"Update prices"}
            </button>
        </div>
    }
}
