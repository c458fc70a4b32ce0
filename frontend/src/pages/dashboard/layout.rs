use crate::pages::dashboard::{components::DashboardToolbar, view_model::DashboardController};
use leptos::*;

#[component]
pub fn DashboardFrame(controller: DashboardController, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                <div class="flex flex-col gap-4 lg:flex-row lg:items-end lg:justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">{"Shopping dashboard"}</h1>
                        <p class="mt-1 text-sm text-fg-muted">{"Lists, purchases and spending at a glance"}</p>
                    </div>
                    <DashboardToolbar controller=controller />
                </div>
                {children()}
            </main>
        </div>
    }
}
