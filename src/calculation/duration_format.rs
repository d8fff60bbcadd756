//! Tenure rendering.

use crate::models::Tenure;

/// Renders a tenure as `"{y}g {m}m {d}d"`.
///
/// Zero components are left out and the rest are joined by single spaces in
/// year, month, day order. An all-zero tenure renders as `"0d"`. The value is
/// rendered as given; normalize it first if it may carry overflow.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::format_duration;
/// use leave_engine::models::Tenure;
///
/// assert_eq!(format_duration(&Tenure::ZERO), "0d");
/// assert_eq!(format_duration(&Tenure::new(2, 0, 5)), "2g 5d");
/// assert_eq!(format_duration(&Tenure::new(1, 3, 0)), "1g 3m");
/// ```
pub fn format_duration(tenure: &Tenure) -> String {
    let parts: Vec<String> = [
        (tenure.years, "g"),
        (tenure.months, "m"),
        (tenure.days, "d"),
    ]
    .into_iter()
    .filter(|(value, _)| *value != 0)
    .map(|(value, unit)| format!("{}{}", value, unit))
    .collect();

    if parts.is_empty() {
        "0d".to_string()
    } else {
        parts.join(" ")
    }
}
