use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div
            class="animate-spin rounded-full h-4 w-4 border-b-2 border-action-primary-bg"
            aria-label="Loading"
        ></div>
    }
}

/// Titled card used by every dashboard section.
#[component]
pub fn Panel(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-base font-semibold text-fg">{title}</h3>
                {subtitle.map(|s| view! { <p class="text-sm text-fg-muted">{s}</p> })}
            </div>
            {children()}
        </section>
    }
}
