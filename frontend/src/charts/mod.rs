//! Declarative chart descriptions and the renderer seam that draws them.
//!
//! A [`ChartSpec`] serializes to the `{ type, data, options }` object that
//! Chart.js accepts, so renderers only need to hand it to the library.

mod chart_js;

pub use chart_js::ChartJsRenderer;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("charting library is not available")]
    Unavailable,
    #[error("chart target `{0}` was not found")]
    TargetMissing(String),
    #[error("failed to render chart `{target}`: {reason}")]
    Render { target: String, reason: String },
}

/// Opaque reference to a chart instance owned by a [`ChartRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u32);

pub trait ChartRenderer {
    /// Draws `spec` into the element with id `target_id`.
    fn render(&self, target_id: &str, spec: &ChartSpec) -> Result<ChartHandle, ChartError>;

    /// Releases a chart previously returned by [`ChartRenderer::render`].
    /// Unknown handles are ignored.
    fn destroy(&self, handle: ChartHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ChartOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Paint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}

/// One color for every element, or one color per element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Single(String),
    PerItem(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn spec_serializes_to_chart_js_config() {
        let spec = ChartSpec {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: vec!["A".into()],
                datasets: vec![Dataset {
                    label: Some("Completion Rate %".into()),
                    data: vec![42.0],
                    background_color: Paint::Single("red".into()),
                    border_color: Some("blue".into()),
                    border_width: Some(1),
                }],
            },
            options: Some(ChartOptions {
                responsive: true,
                scales: Some(Scales {
                    y: Axis {
                        begin_at_zero: true,
                        max: Some(100.0),
                    },
                }),
            }),
        };

        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "type": "bar",
                "data": {
                    "labels": ["A"],
                    "datasets": [{
                        "label": "Completion Rate %",
                        "data": [42.0],
                        "backgroundColor": "red",
                        "borderColor": "blue",
                        "borderWidth": 1
                    }]
                },
                "options": {
                    "responsive": true,
                    "scales": { "y": { "beginAtZero": true, "max": 100.0 } }
                }
            })
        );
    }

    #[test]
    fn per_item_paint_and_missing_options_are_compact() {
        let spec = ChartSpec {
            kind: ChartKind::Pie,
            data: ChartData {
                labels: vec![],
                datasets: vec![Dataset {
                    label: None,
                    data: vec![],
                    background_color: Paint::PerItem(vec!["#fff".into()]),
                    border_color: None,
                    border_width: None,
                }],
            },
            options: None,
        };
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["type"], "pie");
        assert!(value.get("options").is_none());
        assert_eq!(value["data"]["datasets"][0], json!({
            "data": [],
            "backgroundColor": ["#fff"]
        }));
    }
}
