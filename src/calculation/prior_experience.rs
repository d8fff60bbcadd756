//! Prior experience aggregation.
//!
//! Pre-employment tenure is either recorded directly as a day count or
//! derived from the list of previous jobs.

use chrono::Days;
use tracing::debug;

use crate::models::{Employee, PriorJob, Tenure};

use super::tenure::{add_durations, tenure_since};

/// Prior tenure both as a day count and as a tenure triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorTenure {
    /// Total pre-employment days.
    pub days: i64,
    /// The same service as years/months/days.
    pub tenure: Tenure,
    /// Prior jobs left out because their interval was inverted.
    pub skipped_jobs: usize,
}

/// Returns the total number of pre-employment tenure days.
///
/// `previous_experience_days` wins when it is set. Otherwise every prior job
/// contributes `(end - start) + 1` days; jobs that end before they start
/// contribute nothing.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::total_prior_tenure_days;
/// use leave_engine::models::{Employee, PriorJob};
/// use chrono::NaiveDate;
///
/// let mut employee = Employee::new(
///     "emp_001",
///     "Ana Horvat",
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
/// );
/// employee.prior_jobs.push(PriorJob {
///     company: "Acme".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2019, 1, 10).unwrap(),
/// });
/// assert_eq!(total_prior_tenure_days(&employee), 10);
///
/// employee.previous_experience_days = Some(500);
/// assert_eq!(total_prior_tenure_days(&employee), 500);
/// ```
pub fn total_prior_tenure_days(employee: &Employee) -> i64 {
    match employee.previous_experience_days {
        Some(days) => days,
        None => employee
            .prior_jobs
            .iter()
            .filter_map(PriorJob::inclusive_days)
            .sum(),
    }
}

/// Computes prior tenure as both a day count and a tenure triple.
///
/// A recorded day count is normalized with the 30-day month. Prior jobs are
/// measured by calendar one at a time (the last day counts as worked) and
/// then combined with [`add_durations`].
pub fn prior_tenure(employee: &Employee) -> PriorTenure {
    if let Some(days) = employee.previous_experience_days {
        return PriorTenure {
            days,
            tenure: Tenure::from_days(u32::try_from(days).unwrap_or(0)),
            skipped_jobs: 0,
        };
    }

    let mut tenure = Tenure::ZERO;
    let mut skipped_jobs = 0;
    for job in &employee.prior_jobs {
        match job_tenure(job) {
            Some(job_tenure) => tenure = add_durations(tenure, job_tenure),
            None => {
                debug!(
                    employee_id = %employee.id,
                    company = %job.company,
                    start_date = %job.start_date,
                    end_date = %job.end_date,
                    "Skipping prior job with inverted interval"
                );
                skipped_jobs += 1;
            }
        }
    }

    PriorTenure {
        days: total_prior_tenure_days(employee),
        tenure,
        skipped_jobs,
    }
}

fn job_tenure(job: &PriorJob) -> Option<Tenure> {
    if job.end_date < job.start_date {
        return None;
    }
    let day_after_end = job.end_date.checked_add_days(Days::new(1))?;
    tenure_since(job.start_date, day_after_end)
}
