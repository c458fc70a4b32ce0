use crate::api::ApiError;
use leptos::*;

/// Banner shown when the last fetch failed, with a retry button.
#[component]
pub fn FetchErrorBanner(
    error: Signal<Option<ApiError>>,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded flex items-start justify-between gap-4"
            >
                <div class="space-y-1">
                    <div class="font-bold">{"Could not load dashboard data"}</div>
                    <div class="text-sm">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                    {move || error.get().and_then(|e| {
                        (e.code != "UNKNOWN" && !e.code.is_empty()).then(|| view! {
                            <div class="text-xs opacity-75">{"Code: "}{e.code}</div>
                        })
                    })}
                </div>
                <button
                    type="button"
                    class="shrink-0 text-sm font-medium underline"
                    on:click=move |_| on_retry.call(())
                >
                    {"Retry"}
                </button>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn banner_renders_message_and_code() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::http_status(503)));
            view! { <FetchErrorBanner error={signal.into()} on_retry=|_: ()| {} /> }
        });
        assert!(html.contains("Could not load dashboard data"));
        assert!(html.contains("Server responded with HTTP 503"));
        assert!(html.contains("Code: HTTP_503"));
        assert!(html.contains("Retry"));
    }

    #[test]
    fn banner_hides_unknown_code_and_empty_state() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::unknown("boom")));
            view! { <FetchErrorBanner error={signal.into()} on_retry=|_: ()| {} /> }
        });
        assert!(html.contains("boom"));
        assert!(!html.contains("Code:"));

        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <FetchErrorBanner error={signal.into()} on_retry=|_: ()| {} /> }
        });
        assert!(!html.contains("Could not load"));
    }
}
