// Query stages run against the loaded dataset: filtering, joining,
// aggregation and the derived view tables.

pub mod aggregate;
pub mod filter;
pub mod metrics;
pub mod views;

use std::cmp::Ordering;

pub use filter::SearchOutcome;

/// Order two optional prices highest first, with absent prices sorting last.
pub(crate) fn price_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Render a numeric stat without a trailing `.0` for whole numbers.
pub fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
