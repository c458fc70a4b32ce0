use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    api::types::*,
    config::{self, DataSource},
};

pub const SHOPPING_LIST_MODEL: &str = "shopping.list";
pub const DASHBOARD_METHOD: &str = "get_dashboard_data";
pub const DASHBOARD_ROUTE: &str = "/shopping/dashboard/data";

static NEXT_RPC_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    data_source: Option<DataSource>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            data_source: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            data_source: None,
        }
    }

    pub fn with_data_source(mut self, data_source: DataSource) -> Self {
        self.data_source = Some(data_source);
        self
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_config().await.api_base_url.clone()
        }
    }

    async fn resolved_data_source(&self) -> DataSource {
        match self.data_source {
            Some(source) => source,
            None if self.base_url.is_some() => DataSource::default(),
            None => config::await_config().await.data_source,
        }
    }

    /// Calls `model.method(*args, **kwargs)` through the ORM dataset endpoint.
    pub async fn call_kw<T: DeserializeOwned>(
        &self,
        model: &str,
        method: &str,
        args: Vec<Value>,
        kwargs: Map<String, Value>,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}/web/dataset/call_kw/{}/{}", base_url, model, method);
        let params = CallKwParams {
            model,
            method,
            args,
            kwargs,
        };
        self.post_rpc(&url, params).await
    }

    /// Calls a `type='json'` HTTP route.
    pub async fn call_route<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Value,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);
        self.post_rpc(&url, params).await
    }

    pub async fn get_dashboard_data(&self) -> Result<DashboardSnapshot, ApiError> {
        match self.resolved_data_source().await {
            DataSource::CallKw => {
                self.call_kw(SHOPPING_LIST_MODEL, DASHBOARD_METHOD, Vec::new(), Map::new())
                    .await
            }
            DataSource::Route => {
                self.call_route(DASHBOARD_ROUTE, Value::Object(Map::new()))
                    .await
            }
        }
    }

    async fn post_rpc<P: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        params: P,
    ) -> Result<T, ApiError> {
        let id = NEXT_RPC_ID.fetch_add(1, Ordering::Relaxed);
        log::debug!("rpc #{} -> {}", id, url);
        let response = self
            .client
            .post(url)
            .json(&RpcRequest::call(id, params))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::http_status(status.as_u16()));
        }

        let envelope: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))?;

        match envelope {
            RpcResponse {
                error: Some(fault), ..
            } => Err(ApiError::rpc(fault)),
            RpcResponse {
                result: Some(result),
                ..
            } => Ok(result),
            RpcResponse { .. } => Err(ApiError::invalid_response(
                "Response contained neither a result nor an error",
            )),
        }
    }
}
