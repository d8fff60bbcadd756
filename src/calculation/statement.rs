//! Leave statement assembly.
//!
//! Runs the tenure, entitlement and ledger calculations for one employee and
//! collects their audit steps and warnings into a [`LeaveStatement`]. Bad
//! records degrade the statement with warnings; they never abort it.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::config::LedgerSettings;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Employee, LeaveLedgerEntry, LeaveStatement,
};

use super::entitlement::{EntitlementInput, calculate_entitlement};
use super::ledger::summarize_ledger;
use super::tenure::service_summary;

/// Version stamped onto every statement.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds the leave statement for an employee as of a date.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::build_leave_statement;
/// use leave_engine::config::LedgerSettings;
/// use leave_engine::models::{Employee, LeaveLedgerEntry, LedgerEntryKind};
/// use chrono::NaiveDate;
///
/// let employee = Employee::new(
///     "emp_001",
///     "Ana Horvat",
///     NaiveDate::from_ymd_opt(2015, 6, 1).unwrap(),
/// );
/// let entries = vec![LeaveLedgerEntry {
///     id: 1,
///     kind: LedgerEntryKind::usage(
///         NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
///     ),
/// }];
///
/// let as_of = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let statement = build_leave_statement(&employee, &entries, as_of, &LedgerSettings::default());
/// assert_eq!(statement.entitlement.total_days, 21);
/// assert_eq!(statement.remaining_days, 11);
/// ```
pub fn build_leave_statement(
    employee: &Employee,
    entries: &[LeaveLedgerEntry],
    as_of: NaiveDate,
    settings: &LedgerSettings,
) -> LeaveStatement {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    // Service
    let service = service_summary(employee, as_of);
    if service.current.is_none() {
        warnings.push(AuditWarning::new(
            "TENURE_UNAVAILABLE",
            format!(
                "Hire date {} is after {}; current-employer tenure is unknown and counted as zero",
                employee.hire_date, as_of
            ),
            "high",
        ));
    }
    let skipped_jobs = service.skipped_prior_jobs;
    if skipped_jobs > 0 {
        warnings.push(AuditWarning::new(
            "INVALID_PRIOR_JOB",
            format!(
                "{} prior job(s) end before they start and were left out of prior tenure",
                skipped_jobs
            ),
            "medium",
        ));
    }
    steps.push(AuditStep {
        step_number,
        rule_id: "service_tenure".to_string(),
        rule_name: "Service Tenure".to_string(),
        rule_ref: "tenure.calendar".to_string(),
        input: serde_json::json!({
            "hire_date": employee.hire_date.to_string(),
            "as_of": as_of.to_string(),
            "previous_experience_days": employee.previous_experience_days,
            "prior_jobs": employee.prior_jobs.len()
        }),
        output: serde_json::json!({
            "current": service.current,
            "prior": service.prior,
            "total": service.total
        }),
        reasoning: format!(
            "Current {} plus prior {} gives {}",
            service
                .current
                .map(|t| t.to_string())
                .unwrap_or_else(|| "unavailable".to_string()),
            service.prior,
            service.formatted_total
        ),
    });
    step_number += 1;

    // Entitlement
    let entitlement = calculate_entitlement(&EntitlementInput::from(employee), as_of, step_number);
    step_number += entitlement.audit_steps.len() as u32;
    steps.extend(entitlement.audit_steps);
    let entitlement_days = entitlement.breakdown.total_days;

    // Ledger
    let totals = summarize_ledger(entries);
    for entry_id in &totals.skipped_entries {
        warnings.push(AuditWarning::new(
            "INVALID_LEAVE_INTERVAL",
            format!(
                "Ledger entry {} ends before it starts and was not counted",
                entry_id
            ),
            "medium",
        ));
    }
    steps.push(AuditStep {
        step_number,
        rule_id: "ledger_usage".to_string(),
        rule_name: "Ledger Usage".to_string(),
        rule_ref: "ledger.running_balance".to_string(),
        input: serde_json::json!({
            "entries": entries.len(),
            "skipped_entries": totals.skipped_entries
        }),
        output: serde_json::json!({
            "usage_days": totals.usage_days,
            "adjustment_days": totals.adjustment_days,
            "used_days": totals.used_days
        }),
        reasoning: format!(
            "{} days taken minus {} adjusted = {} used",
            totals.usage_days, totals.adjustment_days, totals.used_days
        ),
    });
    step_number += 1;

    let remaining_days = entitlement_days - totals.used_days;
    steps.push(AuditStep {
        step_number,
        rule_id: "remaining_balance".to_string(),
        rule_name: "Remaining Balance".to_string(),
        rule_ref: "ledger.remaining".to_string(),
        input: serde_json::json!({
            "entitlement_days": entitlement_days,
            "used_days": totals.used_days
        }),
        output: serde_json::json!({ "remaining_days": remaining_days }),
        reasoning: format!(
            "{} entitled - {} used = {} remaining",
            entitlement_days, totals.used_days, remaining_days
        ),
    });

    if remaining_days < 0 && settings.warn_on_negative_balance {
        warnings.push(AuditWarning::new(
            "NEGATIVE_BALANCE",
            format!("Leave overdrawn by {} days", -remaining_days),
            "medium",
        ));
    }

    debug!(
        employee_id = %employee.id,
        entitlement_days,
        used_days = totals.used_days,
        remaining_days,
        warnings = warnings.len(),
        "Built leave statement"
    );

    LeaveStatement {
        statement_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        employee_id: employee.id.clone(),
        as_of,
        service,
        entitlement: entitlement.breakdown,
        used_days: totals.used_days,
        remaining_days,
        ledger_entries: entries.len(),
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}
