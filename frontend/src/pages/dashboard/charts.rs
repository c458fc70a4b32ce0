use super::utils::truncate_label;
use crate::{
    api::{CategoryStats, DashboardSnapshot, PriorityStats, RecentList},
    charts::{Axis, ChartData, ChartKind, ChartOptions, ChartSpec, Dataset, Paint, Scales},
};

/// Slice colors for the category doughnut. Entries 0 and 6 are the same red.
pub const CATEGORY_PALETTE: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6384", "#C9CBCF",
];

pub const PRIORITY_PALETTE: [&str; 3] = ["#FF6384", "#FFCE56", "#36A2EB"];
pub const PRIORITY_LABELS: [&str; 3] = ["High", "Medium", "Low"];

const COMPLETION_FILL: &str = "rgba(78, 115, 223, 0.5)";
const COMPLETION_BORDER: &str = "rgba(78, 115, 223, 1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartSlot {
    Completion,
    Category,
    Priority,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 3] = [Self::Completion, Self::Category, Self::Priority];

    /// Id of the canvas the chart is drawn into.
    pub fn target_id(self) -> &'static str {
        match self {
            Self::Completion => "completionChart",
            Self::Category => "categoryChart",
            Self::Priority => "priorityChart",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Completion => "Completion by list",
            Self::Category => "Items by category",
            Self::Priority => "Items by priority",
        }
    }

    /// `None` when the snapshot lacks the section this chart is built from.
    pub fn build(self, snapshot: &DashboardSnapshot) -> Option<ChartSpec> {
        match self {
            Self::Completion => snapshot.recent_lists.as_deref().map(completion_chart),
            Self::Category => snapshot.category_stats.as_ref().map(category_chart),
            Self::Priority => snapshot.priority_stats.as_ref().map(priority_chart),
        }
    }
}

pub fn completion_chart(lists: &[RecentList]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: lists.iter().map(|l| truncate_label(&l.name)).collect(),
            datasets: vec![Dataset {
                label: Some("Completion Rate %".into()),
                data: lists.iter().map(|l| l.completion_rate).collect(),
                background_color: Paint::Single(COMPLETION_FILL.into()),
                border_color: Some(COMPLETION_BORDER.into()),
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
    }
}

pub fn category_chart(stats: &CategoryStats) -> ChartSpec {
    let labels = stats.labels();
    let colors = CATEGORY_PALETTE
        .iter()
        .cycle()
        .take(labels.len())
        .map(|c| c.to_string())
        .collect();
    ChartSpec {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: None,
                data: stats.values(),
                background_color: Paint::PerItem(colors),
                border_color: None,
                border_width: None,
            }],
        },
        options: None,
    }
}

pub fn priority_chart(stats: &PriorityStats) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Pie,
        data: ChartData {
            labels: PRIORITY_LABELS.iter().map(|l| l.to_string()).collect(),
            datasets: vec![Dataset {
                label: None,
                data: vec![stats.high as f64, stats.medium as f64, stats.low as f64],
                background_color: Paint::PerItem(
                    PRIORITY_PALETTE.iter().map(|c| c.to_string()).collect(),
                ),
                border_color: None,
                border_width: None,
            }],
        },
        options: None,
    }
}
