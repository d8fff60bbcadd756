//! Leave statement models.
//!
//! This module contains the [`LeaveStatement`] type and its associated
//! structures that capture the output of a leave calculation: the service
//! summary, the entitlement breakdown, the ledger totals and an audit trace
//! recording every rule that was applied.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Tenure;

/// Current, prior and combined service for one employee.
///
/// # Example
///
/// ```
/// use leave_engine::models::{ServiceSummary, Tenure};
///
/// let summary = ServiceSummary {
///     current: Some(Tenure::new(4, 2, 10)),
///     prior: Tenure::new(1, 0, 0),
///     prior_days: 365,
///     skipped_prior_jobs: 0,
///     total: Tenure::new(5, 2, 10),
///     formatted_total: "5g 2m 10d".to_string(),
/// };
/// assert!(summary.current.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    /// Tenure with the current employer, `None` when unavailable.
    pub current: Option<Tenure>,
    /// Tenure with previous employers.
    pub prior: Tenure,
    /// Prior tenure as a day count.
    pub prior_days: i64,
    /// Prior jobs left out because they end before they start.
    #[serde(default)]
    pub skipped_prior_jobs: usize,
    /// Combined, normalized tenure.
    pub total: Tenure,
    /// The combined tenure rendered for display.
    pub formatted_total: String,
}

/// The components that make up an annual entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementBreakdown {
    /// Days every employee receives.
    pub base_days: i64,
    /// Extra days for a recognised disability.
    pub disability_days: i64,
    /// Whole years of combined service used for the tenure band.
    pub total_tenure_years: i64,
    /// Extra days from the tenure band.
    pub tenure_days: i64,
    /// Extra days for children or sole caregiving.
    pub family_days: i64,
    /// Sum of all components.
    pub total_days: i64,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the leave rule table row behind this step.
    pub rule_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate degraded input that did not stop the calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a leave calculation for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveStatement {
    /// Unique identifier for this statement.
    pub statement_id: Uuid,
    /// When the statement was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the statement.
    pub engine_version: String,
    /// The employee the statement is for.
    pub employee_id: String,
    /// The date the calculation was evaluated at.
    pub as_of: NaiveDate,
    /// Service totals.
    pub service: ServiceSummary,
    /// How the entitlement was composed.
    pub entitlement: EntitlementBreakdown,
    /// Net days consumed by the ledger.
    pub used_days: i64,
    /// Entitlement minus used days. May be negative.
    pub remaining_days: i64,
    /// Number of ledger entries considered.
    pub ledger_entries: usize,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl LeaveStatement {
    /// Returns true if more leave was used than the employee is entitled to.
    pub fn is_overdrawn(&self) -> bool {
        self.remaining_days < 0
    }
}
