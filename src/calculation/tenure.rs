//! Tenure calculation functionality.
//!
//! Calendar-accurate differences between two dates, and the fixed-carry
//! addition used to combine tenures from several employers.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{Employee, ServiceSummary, Tenure};

use super::duration_format::format_duration;
use super::prior_experience::prior_tenure;

/// Computes the civil years/months/days elapsed from `start_date` to `as_of`.
///
/// Months are counted by calendar: adding a month to the 31st lands on the
/// last day of a shorter month, and the leftover days are exact. Returns
/// `None` when `start_date` lies after `as_of`; callers treat that as
/// "tenure unknown", never as a negative tenure.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::tenure_since;
/// use leave_engine::models::Tenure;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 2, 2).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
/// assert_eq!(tenure_since(start, as_of), Some(Tenure::new(0, 0, 27)));
///
/// let leap_start = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
/// let leap_as_of = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(tenure_since(leap_start, leap_as_of), Some(Tenure::new(0, 0, 28)));
/// ```
pub fn tenure_since(start_date: NaiveDate, as_of: NaiveDate) -> Option<Tenure> {
    if start_date > as_of {
        return None;
    }

    let mut months = (as_of.year() - start_date.year()) * 12 + as_of.month() as i32
        - start_date.month() as i32;
    let mut anchor = add_months(start_date, months)?;
    if anchor > as_of {
        months -= 1;
        anchor = add_months(start_date, months)?;
    }

    let months = u32::try_from(months).ok()?;
    let days = u32::try_from((as_of - anchor).num_days()).ok()?;

    Some(Tenure::new(months / 12, months % 12, days))
}

fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(u32::try_from(months).ok()?))
}

/// Adds two tenures and carries overflow.
///
/// Days carry into months 30 at a time and months into years 12 at a time.
/// The 30-day month is an approximation: two spans of identical real length
/// can normalize to different day remainders depending on which calendar
/// months they covered. The rule is kept as is so results match the
/// figures HR already has on record.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::add_durations;
/// use leave_engine::models::Tenure;
///
/// assert_eq!(add_durations(Tenure::new(0, 0, 35), Tenure::ZERO), Tenure::new(0, 1, 5));
/// assert_eq!(add_durations(Tenure::new(0, 11, 29), Tenure::new(0, 0, 5)), Tenure::new(1, 0, 4));
/// ```
pub fn add_durations(a: Tenure, b: Tenure) -> Tenure {
    Tenure::new(a.years + b.years, a.months + b.months, a.days + b.days).normalized()
}

/// Returns the day count used by the entitlement rules for tenure with the
/// current employer: `years*365 + months*30 + days`, or 0 when the tenure is
/// unavailable.
pub fn tenure_days_at_current_employer(hire_date: NaiveDate, as_of: NaiveDate) -> i64 {
    tenure_since(hire_date, as_of)
        .map(|tenure| tenure.approximate_days())
        .unwrap_or(0)
}

/// Summarizes current, prior and combined service for an employee.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::service_summary;
/// use leave_engine::models::{Employee, Tenure};
/// use chrono::NaiveDate;
///
/// let mut employee = Employee::new(
///     "emp_001",
///     "Ana Horvat",
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
/// );
/// employee.previous_experience_days = Some(400);
///
/// let summary = service_summary(&employee, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// assert_eq!(summary.current, Some(Tenure::new(5, 0, 0)));
/// assert_eq!(summary.prior, Tenure::new(1, 1, 10));
/// assert_eq!(summary.formatted_total, "6g 1m 10d");
/// ```
pub fn service_summary(employee: &Employee, as_of: NaiveDate) -> ServiceSummary {
    let current = tenure_since(employee.hire_date, as_of);
    let prior = prior_tenure(employee);
    let total = add_durations(current.unwrap_or(Tenure::ZERO), prior.tenure);

    ServiceSummary {
        current,
        prior: prior.tenure,
        prior_days: prior.days,
        skipped_prior_jobs: prior.skipped_jobs,
        total,
        formatted_total: format_duration(&total),
    }
}
