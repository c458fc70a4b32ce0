use crate::{
    actions::ActionRegistry,
    components::error::FetchErrorBanner,
    error::DashboardError,
    pages::dashboard::{
        components::{BudgetSection, ChartsSection, RecentListsSection, SummarySection},
        layout::DashboardFrame,
        view_model::{log_load_outcome, DashboardController, DashboardDeps},
    },
};
use leptos::*;

pub const DASHBOARD_ACTION_TAG: &str = "shopping_dashboard";

/// Registers the dashboard as the `shopping_dashboard` client action. Each
/// time the host opens it a fresh controller is built from `deps`.
pub fn register(registry: &mut ActionRegistry, deps: DashboardDeps) -> Result<(), DashboardError> {
    registry.add(DASHBOARD_ACTION_TAG, move || {
        let controller = DashboardController::new(deps.clone());
        view! { <DashboardPage controller=controller /> }.into_view()
    })
}

#[component]
pub fn DashboardPage(controller: DashboardController) -> impl IntoView {
    {
        let controller = controller.clone();
        create_effect(move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                log_load_outcome("activate", controller.activate().await);
            });
        });
    }
    {
        let controller = controller.clone();
        on_cleanup(move || controller.dispose());
    }

    let state = controller.state;
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let on_retry = {
        let controller = controller.clone();
        move |_: ()| {
            let controller = controller.clone();
            spawn_local(async move {
                log_load_outcome("refresh", controller.refresh().await);
            });
        }
    };
    let charts_available = controller.charts_available();

    view! {
        <DashboardFrame controller=controller>
            <FetchErrorBanner error=error on_retry=on_retry />
            <SummarySection state=state />
            <BudgetSection state=state />
            <ChartsSection available=charts_available />
            <RecentListsSection state=state />
        </DashboardFrame>
    }
}
