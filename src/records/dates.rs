//! Textual date parsing for imported records.
//!
//! Records written over the years use several formats (`2024-03-01`,
//! `01.03.2024.`, `01/03/2024`). Everything past this module works on
//! [`NaiveDate`] only.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Parses a date by trying each `chrono` format in order.
///
/// Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use leave_engine::records::parse_date;
/// use chrono::NaiveDate;
///
/// let formats = vec!["%Y-%m-%d".to_string(), "%d.%m.%Y.".to_string()];
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(parse_date("2024-03-01", &formats).unwrap(), expected);
/// assert_eq!(parse_date(" 01.03.2024. ", &formats).unwrap(), expected);
/// assert!(parse_date("March 1st", &formats).is_err());
/// ```
pub fn parse_date(value: &str, formats: &[String]) -> EngineResult<NaiveDate> {
    let trimmed = value.trim();
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| EngineError::InvalidDate {
            value: value.to_string(),
        })
}

/// Parses an optional date; missing or blank text is `Ok(None)`.
pub fn parse_optional_date(
    value: Option<&str>,
    formats: &[String],
) -> EngineResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_date(text, formats).map(Some),
    }
}
