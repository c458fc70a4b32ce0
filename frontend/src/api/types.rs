use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::{Map, Value};
use std::fmt;

/// Aggregated statistics returned by `shopping.list/get_dashboard_data`.
///
/// Scalar counters fall back to zero when the server omits them or sends
/// `null`. Collection sections stay `None` when absent so the matching
/// dashboard section is skipped instead of rendered empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_lists: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bought_items: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub used_budget: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_completion: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_lists: Option<Vec<RecentList>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_stats: Option<CategoryStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_stats: Option<PriorityStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_stats: Option<BudgetStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentList {
    #[serde(default, deserialize_with = "string_or_false")]
    pub name: String,
    #[serde(default)]
    pub state: ListState,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completion_rate: f64,
}

/// Workflow state of a shopping list. Unknown values are kept verbatim so the
/// badge can still show what the server sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Draft,
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl ListState {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "draft" => Self::Draft,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ListState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ListState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = string_or_false(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

/// Item counts per category, in the order the server listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStats(Vec<(String, f64)>);

impl CategoryStats {
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|(_, count)| *count).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CategoryStats {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Serialize for CategoryStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in &self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryStats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CategoryStatsVisitor;

        impl<'de> Visitor<'de> for CategoryStatsVisitor {
            type Value = CategoryStats;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping category names to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, count)) = access.next_entry::<String, Option<f64>>()? {
                    entries.push((label, count.unwrap_or_default()));
                }
                Ok(CategoryStats(entries))
            }
        }

        deserializer.deserialize_map(CategoryStatsVisitor)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub high: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medium: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub low: i64,
}

/// Totals over the budgets active today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_budget: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget_used: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget_remaining: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Empty char/selection fields come back from the ORM as `false`.
fn string_or_false<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null | Value::Bool(false) => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<P> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: P,
    pub id: u64,
}

impl<P> RpcRequest<P> {
    pub fn call(id: u64, params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "call",
            params,
            id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CallKwParams<'a> {
    pub model: &'a str,
    pub method: &'a str,
    pub args: Vec<Value>,
    pub kwargs: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcFault>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcFault {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<RpcFaultData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcFaultData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn http_status(status: u16) -> Self {
        Self {
            error: format!("Server responded with HTTP {}", status),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "INVALID_RESPONSE".to_string(),
            details: None,
        }
    }

    /// Maps a JSON-RPC fault, preferring the server-side exception message
    /// over the generic envelope message.
    pub fn rpc(fault: RpcFault) -> Self {
        let message = fault
            .data
            .as_ref()
            .and_then(|d| d.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fault.message.clone());
        let details = serde_json::to_value(&fault).ok();
        Self {
            error: message,
            code: "RPC_ERROR".to_string(),
            details,
        }
    }
}
