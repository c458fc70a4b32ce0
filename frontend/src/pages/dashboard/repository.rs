use crate::api::{ApiClient, ApiError, DashboardSnapshot};
use async_trait::async_trait;

/// Where the dashboard gets its snapshot from.
#[async_trait(?Send)]
pub trait DashboardSource {
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError>;
}

#[async_trait(?Send)]
impl DashboardSource for ApiClient {
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        self.get_dashboard_data().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn api_client_serves_as_dashboard_source() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/web/dataset/call_kw/shopping.list/get_dashboard_data");
                then.status(200).json_body(json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "result": { "total_lists": 9, "avg_completion": 12.5 }
                }));
            })
            .await;

        let source: Box<dyn DashboardSource> =
            Box::new(ApiClient::new_with_base_url(server.base_url()));
        let snapshot = source.fetch_dashboard().await.unwrap();
        assert_eq!(snapshot.total_lists, 9);
        assert_eq!(snapshot.avg_completion, 12.5);
    }
}
