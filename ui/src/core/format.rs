//! Formatting helpers for presenting segments.

/// Item label, e.g. `"Total, 79%"`.
pub fn segment_label(category: &str, value: f64) -> String {
    format!("{category}, {value}%")
}
