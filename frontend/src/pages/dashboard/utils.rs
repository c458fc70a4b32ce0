use crate::api::ListState;
use chrono::{DateTime, Local};

pub const LABEL_MAX_CHARS: usize = 15;

/// Rounds ties away from zero; `{:.N}` alone rounds them to even.
fn round_half_away(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", round_half_away(amount, 2))
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", round_half_away(value, 1))
}

pub fn format_count(count: i64) -> String {
    count.to_string()
}

pub fn format_last_updated(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

/// Shortens chart labels to [`LABEL_MAX_CHARS`] characters plus `...`.
pub fn truncate_label(name: &str) -> String {
    match name.char_indices().nth(LABEL_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &name[..cut]),
        None => name.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Success,
    Warning,
    Neutral,
}

impl StatusBadge {
    pub fn for_state(state: &ListState) -> Self {
        match state {
            ListState::Completed => Self::Success,
            ListState::InProgress => Self::Warning,
            _ => Self::Neutral,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "bg-status-success-bg text-status-success-text",
            Self::Warning => "bg-status-warning-bg text-status-warning-text",
            Self::Neutral => "bg-surface-muted text-fg-muted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStyle {
    Full,
    Info,
}

impl ProgressStyle {
    #[allow(clippy::float_cmp)]
    pub fn for_rate(completion_rate: f64) -> Self {
        if completion_rate == 100.0 {
            Self::Full
        } else {
            Self::Info
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Full => "bg-status-success-text",
            Self::Info => "bg-status-info-text",
        }
    }
}

/// Bar width in percent. The label keeps the raw value; only the drawn
/// width is bounded.
pub fn progress_width(completion_rate: f64) -> f64 {
    if completion_rate.is_nan() {
        0.0
    } else {
        completion_rate.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use chrono::TimeZone;

    #[wasm_bindgen_test]
    fn formats_amount_with_two_decimals() {
        assert_eq!(format_amount(1234.5), "$1234.50");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(19.999), "$20.00");
    }

    #[wasm_bindgen_test]
    fn exact_ties_round_up() {
        assert_eq!(format_percent(6.25), "6.3%");
        assert_eq!(format_amount(0.125), "$0.13");
        assert_eq!(format_amount(1234.125), "$1234.13");
        assert_eq!(format_percent(-6.25), "-6.3%");
    }

    #[wasm_bindgen_test]
    fn formats_percent_with_one_decimal() {
        assert_eq!(format_percent(83.456), "83.5%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(120.0), "120.0%");
    }

    #[wasm_bindgen_test]
    fn formats_counts_and_time() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(42), "42");
        let at = Local.with_ymd_and_hms(2025, 3, 1, 7, 5, 9).unwrap();
        assert_eq!(format_last_updated(&at), "07:05:09");
    }

    #[wasm_bindgen_test]
    fn truncates_long_labels() {
        assert_eq!(truncate_label("Groceries"), "Groceries");
        assert_eq!(truncate_label("exactly15chars!"), "exactly15chars!");
        assert_eq!(
            truncate_label("Weekend barbecue supplies"),
            "Weekend barbecu..."
        );
    }

    #[wasm_bindgen_test]
    fn truncation_counts_characters_not_bytes() {
        let name = "قائمة المشتريات الأسبوعية";
        let label = truncate_label(name);
        assert_eq!(label.chars().count(), LABEL_MAX_CHARS + 3);
        assert!(label.ends_with("..."));
    }

    #[wasm_bindgen_test]
    fn badge_follows_state() {
        assert_eq!(StatusBadge::for_state(&ListState::Completed), StatusBadge::Success);
        assert_eq!(StatusBadge::for_state(&ListState::InProgress), StatusBadge::Warning);
        assert_eq!(StatusBadge::for_state(&ListState::Draft), StatusBadge::Neutral);
        assert_eq!(StatusBadge::for_state(&ListState::Cancelled), StatusBadge::Neutral);
        assert_eq!(
            StatusBadge::for_state(&ListState::Other("Completed".into())),
            StatusBadge::Neutral
        );
    }

    #[wasm_bindgen_test]
    fn progress_is_full_only_at_exactly_one_hundred() {
        assert_eq!(ProgressStyle::for_rate(100.0), ProgressStyle::Full);
        assert_eq!(ProgressStyle::for_rate(99.999), ProgressStyle::Info);
        assert_eq!(ProgressStyle::for_rate(100.5), ProgressStyle::Info);
        assert_eq!(ProgressStyle::for_rate(0.0), ProgressStyle::Info);
    }

    #[wasm_bindgen_test]
    fn progress_width_is_bounded() {
        assert_eq!(progress_width(-5.0), 0.0);
        assert_eq!(progress_width(42.5), 42.5);
        assert_eq!(progress_width(150.0), 100.0);
        assert_eq!(progress_width(f64::NAN), 0.0);
    }
}
