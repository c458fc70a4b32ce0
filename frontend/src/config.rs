use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const ENV_GLOBAL: &str = "__SHOPPING_DASHBOARD_ENV";
const CONFIG_GLOBAL: &str = "__SHOPPING_DASHBOARD_CONFIG";
const FALLBACK_ORIGIN: &str = "http://localhost:8069";

/// How the dashboard payload is requested from the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// `shopping.list.get_dashboard_data()` through `/web/dataset/call_kw`.
    #[default]
    CallKw,
    /// The `/shopping/dashboard/data` JSON route.
    Route,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub data_source: Option<DataSource>,
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    /// Fills unset keys from `other`.
    fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            data_source: self.data_source.or(other.data_source),
            log_level: self.log_level.or(other.log_level),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.data_source.is_some() && self.log_level.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub data_source: DataSource,
    pub log_level: LevelFilter,
}

static CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

pub fn resolve(config: RuntimeConfig, origin: Option<String>) -> ResolvedConfig {
    let api_base_url = config
        .api_base_url
        .filter(|url| !url.trim().is_empty())
        .or(origin)
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string());
    ResolvedConfig {
        api_base_url: api_base_url.trim_end_matches('/').to_string(),
        data_source: config.data_source.unwrap_or_default(),
        log_level: config
            .log_level
            .as_deref()
            .map(parse_log_level)
            .unwrap_or(LevelFilter::Info),
    }
}

pub fn parse_log_level(raw: &str) -> LevelFilter {
    raw.trim().parse().unwrap_or(LevelFilter::Info)
}

fn read_global(name: &str) -> Option<RuntimeConfig> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let string_key = |lower: &str, upper: &str| {
        js_sys::Reflect::get(&obj, &lower.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &upper.into()).ok())
            .and_then(|v| v.as_string())
    };
    Some(RuntimeConfig {
        api_base_url: string_key("api_base_url", "API_BASE_URL"),
        data_source: string_key("data_source", "DATA_SOURCE")
            .and_then(|raw| serde_json::from_value(serde_json::Value::String(raw)).ok()),
        log_level: string_key("log_level", "LOG_LEVEL"),
    })
}

fn snapshot_from_globals() -> RuntimeConfig {
    // env.js takes precedence over the host page's inline config.
    let env = read_global(ENV_GLOBAL).unwrap_or_default();
    env.or(read_global(CONFIG_GLOBAL).unwrap_or_default())
}

fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = web_sys::Url::new_with_base("config.json", &href).ok()?.href();
    let resp = reqwest::get(&url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_config() -> &'static ResolvedConfig {
    if let Some(cached) = CONFIG.get() {
        return cached;
    }
    let mut cfg = snapshot_from_globals();
    if !cfg.is_complete() {
        if let Some(fetched) = fetch_runtime_config().await {
            cfg = cfg.or(fetched);
        }
    }
    let resolved = resolve(cfg, window_origin());
    CONFIG.get_or_init(|| resolved)
}

pub async fn init() -> &'static ResolvedConfig {
    let cfg = await_config().await;
    log::set_max_level(cfg.log_level);
    cfg
}
