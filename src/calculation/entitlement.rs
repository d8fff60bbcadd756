//! Annual leave entitlement.
//!
//! This module applies the fixed leave rule table to an employee's service
//! and personal circumstances:
//!
//! | Rule            | Condition                         | Days |
//! |-----------------|-----------------------------------|------|
//! | Base            | always                            | 20   |
//! | Disability      | recognised disability             | +5   |
//! | Tenure band     | 10–19 / 20–29 / 30+ years         | +1 / +2 / +3 |
//! | Family          | sole caregiver                    | +3   |
//! | Family          | otherwise 1 / 2+ children under 15| +1 / +2 |
//!
//! Tenure bands and family bonuses are mutually exclusive within their row:
//! only the highest applicable band counts, and a sole caregiver never also
//! receives the children bonus.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{AuditStep, Employee, EntitlementBreakdown, DAYS_PER_YEAR};

use super::prior_experience::total_prior_tenure_days;
use super::tenure::tenure_days_at_current_employer;

/// Days every employee is entitled to.
pub const BASE_LEAVE_DAYS: i64 = 20;

/// Extra days for a recognised disability.
pub const DISABILITY_BONUS_DAYS: i64 = 5;

/// Extra days for a sole caregiver, in place of the children bonus.
pub const SOLE_CAREGIVER_BONUS_DAYS: i64 = 3;

/// Tenure bands as `(minimum whole years, bonus days)`, highest first.
pub const TENURE_BONUS_BANDS: [(i64, i64); 3] = [(30, 3), (20, 2), (10, 1)];

/// Identifies the rule table rows in audit steps.
const RULE_TABLE: &str = "annual_leave_rules";

/// The facts the entitlement rules read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitlementInput {
    /// First day with the current employer.
    pub hire_date: NaiveDate,
    /// Pre-employment tenure in days.
    pub previous_experience_days: i64,
    /// Whether the employee has a recognised disability.
    pub disability: bool,
    /// Dependent children younger than 15.
    pub children_under_15: u32,
    /// Whether the employee is the sole caregiver.
    pub sole_caregiver: bool,
}

impl From<&Employee> for EntitlementInput {
    fn from(employee: &Employee) -> Self {
        Self {
            hire_date: employee.hire_date,
            previous_experience_days: total_prior_tenure_days(employee),
            disability: employee.disability,
            children_under_15: employee.children_under_15,
            sole_caregiver: employee.sole_caregiver,
        }
    }
}

/// The result of an entitlement calculation, including the audit steps.
#[derive(Debug, Clone)]
pub struct EntitlementResult {
    /// How the entitlement was composed.
    pub breakdown: EntitlementBreakdown,
    /// One audit step per rule row.
    pub audit_steps: Vec<AuditStep>,
}

impl EntitlementResult {
    /// The annual entitlement in days.
    pub fn days(&self) -> i64 {
        self.breakdown.total_days
    }
}

/// Returns the tenure band bonus for a number of whole years.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::tenure_bonus_days;
///
/// assert_eq!(tenure_bonus_days(9), 0);
/// assert_eq!(tenure_bonus_days(10), 1);
/// assert_eq!(tenure_bonus_days(29), 2);
/// assert_eq!(tenure_bonus_days(45), 3);
/// ```
pub fn tenure_bonus_days(total_tenure_years: i64) -> i64 {
    TENURE_BONUS_BANDS
        .iter()
        .find(|(min_years, _)| total_tenure_years >= *min_years)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

/// Returns the family bonus.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::family_bonus_days;
///
/// assert_eq!(family_bonus_days(0, false), 0);
/// assert_eq!(family_bonus_days(1, false), 1);
/// assert_eq!(family_bonus_days(4, false), 2);
/// assert_eq!(family_bonus_days(2, true), 3);
/// ```
pub fn family_bonus_days(children_under_15: u32, sole_caregiver: bool) -> i64 {
    if sole_caregiver {
        SOLE_CAREGIVER_BONUS_DAYS
    } else {
        match children_under_15 {
            0 => 0,
            1 => 1,
            _ => 2,
        }
    }
}

/// Returns whole years of combined service:
/// `floor((current-employer days + previous experience days) / 365)`.
///
/// Current-employer days come from the calendar tenure collapsed with the
/// 30-day month, so the year boundary is crossed where that day count says,
/// not on the calendar anniversary.
pub fn total_tenure_years(
    hire_date: NaiveDate,
    previous_experience_days: i64,
    as_of: NaiveDate,
) -> i64 {
    let total_days = tenure_days_at_current_employer(hire_date, as_of) + previous_experience_days;
    total_days.div_euclid(i64::from(DAYS_PER_YEAR))
}

/// Calculates the annual entitlement with an audit step per rule row.
///
/// # Arguments
///
/// * `input` - The facts the rules read
/// * `as_of` - The date service is measured up to
/// * `step_number` - The step number of the first audit step
pub fn calculate_entitlement(
    input: &EntitlementInput,
    as_of: NaiveDate,
    step_number: u32,
) -> EntitlementResult {
    let total_years = total_tenure_years(input.hire_date, input.previous_experience_days, as_of);
    let disability_days = if input.disability {
        DISABILITY_BONUS_DAYS
    } else {
        0
    };
    let tenure_days = tenure_bonus_days(total_years);
    let family_days = family_bonus_days(input.children_under_15, input.sole_caregiver);
    let total_days = BASE_LEAVE_DAYS + disability_days + tenure_days + family_days;

    debug!(
        hire_date = %input.hire_date,
        total_years,
        disability_days,
        tenure_days,
        family_days,
        total_days,
        "Calculated annual entitlement"
    );

    let mut audit_steps = Vec::with_capacity(4);

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "base_entitlement".to_string(),
        rule_name: "Base Entitlement".to_string(),
        rule_ref: format!("{}.base", RULE_TABLE),
        input: serde_json::json!({}),
        output: serde_json::json!({ "days": BASE_LEAVE_DAYS }),
        reasoning: format!("Every employee receives {} days", BASE_LEAVE_DAYS),
    });

    audit_steps.push(AuditStep {
        step_number: step_number + 1,
        rule_id: "disability_bonus".to_string(),
        rule_name: "Disability Bonus".to_string(),
        rule_ref: format!("{}.disability", RULE_TABLE),
        input: serde_json::json!({ "disability": input.disability }),
        output: serde_json::json!({ "days": disability_days }),
        reasoning: if input.disability {
            format!("Recognised disability adds {} days", DISABILITY_BONUS_DAYS)
        } else {
            "No recognised disability".to_string()
        },
    });

    audit_steps.push(AuditStep {
        step_number: step_number + 2,
        rule_id: "tenure_bonus".to_string(),
        rule_name: "Tenure Bonus".to_string(),
        rule_ref: format!("{}.tenure_band", RULE_TABLE),
        input: serde_json::json!({
            "hire_date": input.hire_date.to_string(),
            "as_of": as_of.to_string(),
            "current_employer_days": tenure_days_at_current_employer(input.hire_date, as_of),
            "previous_experience_days": input.previous_experience_days
        }),
        output: serde_json::json!({
            "total_tenure_years": total_years,
            "days": tenure_days
        }),
        reasoning: format!(
            "{} whole years of combined service gives +{} days",
            total_years, tenure_days
        ),
    });

    audit_steps.push(AuditStep {
        step_number: step_number + 3,
        rule_id: "family_bonus".to_string(),
        rule_name: "Family Bonus".to_string(),
        rule_ref: format!("{}.family", RULE_TABLE),
        input: serde_json::json!({
            "children_under_15": input.children_under_15,
            "sole_caregiver": input.sole_caregiver
        }),
        output: serde_json::json!({ "days": family_days }),
        reasoning: if input.sole_caregiver {
            format!(
                "Sole caregiver receives +{} days in place of the children bonus",
                SOLE_CAREGIVER_BONUS_DAYS
            )
        } else {
            format!(
                "{} children under 15 gives +{} days",
                input.children_under_15, family_days
            )
        },
    });

    EntitlementResult {
        breakdown: EntitlementBreakdown {
            base_days: BASE_LEAVE_DAYS,
            disability_days,
            total_tenure_years: total_years,
            tenure_days,
            family_days,
            total_days,
        },
        audit_steps,
    }
}

/// Returns the annual leave entitlement in days.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::annual_entitlement;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let hired = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();
/// assert_eq!(annual_entitlement(hired, 0, false, 0, false, as_of), 21);
/// ```
pub fn annual_entitlement(
    hire_date: NaiveDate,
    previous_experience_days: i64,
    disability: bool,
    children_under_15: u32,
    sole_caregiver: bool,
    as_of: NaiveDate,
) -> i64 {
    let input = EntitlementInput {
        hire_date,
        previous_experience_days,
        disability,
        children_under_15,
        sole_caregiver,
    };
    calculate_entitlement(&input, as_of, 1).days()
}
