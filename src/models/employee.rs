//! Employee model and related types.
//!
//! This module defines the [`Employee`] record read by the calculations,
//! together with prior-employment intervals and medical examination
//! schedules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A period of employment with a previous employer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorJob {
    /// The previous employer's name.
    pub company: String,
    /// First day of the employment.
    pub start_date: NaiveDate,
    /// Last day of the employment (inclusive).
    pub end_date: NaiveDate,
}

impl PriorJob {
    /// Returns the inclusive number of days worked, or `None` if the
    /// interval ends before it starts.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::PriorJob;
    /// use chrono::NaiveDate;
    ///
    /// let job = PriorJob {
    ///     company: "Acme d.o.o.".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
    /// };
    /// assert_eq!(job.inclusive_days(), Some(1));
    /// ```
    pub fn inclusive_days(&self) -> Option<i64> {
        if self.end_date < self.start_date {
            return None;
        }
        Some((self.end_date - self.start_date).num_days() + 1)
    }
}

/// Schedule of one recurring medical examination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSchedule {
    /// Whether the employee's role requires this examination.
    #[serde(default = "default_required")]
    pub required: bool,
    /// When the examination was last passed.
    #[serde(default)]
    pub last_date: Option<NaiveDate>,
    /// When the examination is next due.
    #[serde(default)]
    pub next_date: Option<NaiveDate>,
}

fn default_required() -> bool {
    true
}

impl Default for ExamSchedule {
    fn default() -> Self {
        Self {
            required: true,
            last_date: None,
            next_date: None,
        }
    }
}

/// The medical examinations tracked for every employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalExams {
    /// Physical fitness examination.
    #[serde(default)]
    pub physical: ExamSchedule,
    /// Psychological examination.
    #[serde(default)]
    pub psychological: ExamSchedule,
}

/// Represents an employee whose tenure and leave are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Personal identification number, if recorded.
    #[serde(default)]
    pub oib: Option<String>,
    /// Postal address, if recorded.
    #[serde(default)]
    pub address: Option<String>,
    /// Date of birth, if recorded.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// First day with the current employer.
    pub hire_date: NaiveDate,
    /// Pre-employment tenure already summed into days.
    ///
    /// When `None`, prior tenure is derived from `prior_jobs`.
    #[serde(default)]
    pub previous_experience_days: Option<i64>,
    /// Prior employment intervals.
    #[serde(default)]
    pub prior_jobs: Vec<PriorJob>,
    /// Whether the employee has a recognised disability.
    #[serde(default)]
    pub disability: bool,
    /// Number of dependent children younger than 15.
    #[serde(default)]
    pub children_under_15: u32,
    /// Whether the employee is the sole caregiver of their children.
    #[serde(default)]
    pub sole_caregiver: bool,
    /// Medical examination schedules.
    #[serde(default)]
    pub medical: MedicalExams,
}

impl Employee {
    /// Creates an employee with only the fields the entitlement rules need
    /// left at their defaults.
    pub fn new(id: impl Into<String>, name: impl Into<String>, hire_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            oib: None,
            address: None,
            birth_date: None,
            hire_date,
            previous_experience_days: None,
            prior_jobs: Vec::new(),
            disability: false,
            children_under_15: 0,
            sole_caregiver: false,
            medical: MedicalExams::default(),
        }
    }
}
