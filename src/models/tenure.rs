//! Tenure model.
//!
//! A [`Tenure`] is an elapsed span of service as a civil years/months/days
//! triple. Values produced by calendar subtraction are exact; values produced
//! by carrying overflow use the fixed 30-day month and 12-month year.

use serde::{Deserialize, Serialize};

/// Days carried into one month when normalizing.
pub const DAYS_PER_MONTH: u32 = 30;

/// Months carried into one year when normalizing.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Days counted per year when a tenure is collapsed to a day count.
pub const DAYS_PER_YEAR: u32 = 365;

/// An elapsed span of service expressed in years, months and days.
///
/// # Example
///
/// ```
/// use leave_engine::models::Tenure;
///
/// let tenure = Tenure::new(2, 0, 5);
/// assert_eq!(tenure.to_string(), "2g 5d");
/// assert_eq!(tenure.approximate_days(), 735);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenure {
    /// Whole years.
    pub years: u32,
    /// Whole months beyond the years.
    pub months: u32,
    /// Remaining days beyond the months.
    pub days: u32,
}

impl Tenure {
    /// The zero-length tenure.
    pub const ZERO: Tenure = Tenure {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Creates a tenure from its components without normalizing.
    pub const fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Builds a normalized tenure from a raw day count using the 30-day month.
    ///
    /// 365 days becomes `1g 0m 5d`, not one year.
    pub fn from_days(days: u32) -> Self {
        Tenure::new(0, 0, days).normalized()
    }

    /// Carries days into months and months into years.
    pub fn normalized(self) -> Self {
        let months = self.months + self.days / DAYS_PER_MONTH;
        Self {
            years: self.years + months / MONTHS_PER_YEAR,
            months: months % MONTHS_PER_YEAR,
            days: self.days % DAYS_PER_MONTH,
        }
    }

    /// Returns true when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Returns true when `months < 12` and `days < 30`.
    pub fn is_normalized(&self) -> bool {
        self.months < MONTHS_PER_YEAR && self.days < DAYS_PER_MONTH
    }

    /// Collapses the tenure to `years*365 + months*30 + days`.
    pub fn approximate_days(&self) -> i64 {
        i64::from(self.years) * i64::from(DAYS_PER_YEAR)
            + i64::from(self.months) * i64::from(DAYS_PER_MONTH)
            + i64::from(self.days)
    }
}

impl std::fmt::Display for Tenure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::calculation::format_duration(self))
    }
}
