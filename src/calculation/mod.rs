//! Calculation logic for the leave engine.
//!
//! This module contains the tenure calculator (calendar-accurate tenure,
//! fixed-carry addition, prior experience aggregation and rendering), the
//! leave entitlement rules, ledger reconciliation, statement assembly with
//! an audit trace, and medical examination due-date tracking.

mod duration_format;
mod entitlement;
mod ledger;
mod medical;
mod prior_experience;
mod statement;
mod tenure;

pub use duration_format::format_duration;
pub use entitlement::{
    BASE_LEAVE_DAYS, DISABILITY_BONUS_DAYS, EntitlementInput, EntitlementResult,
    SOLE_CAREGIVER_BONUS_DAYS, TENURE_BONUS_BANDS, annual_entitlement, calculate_entitlement,
    family_bonus_days, tenure_bonus_days, total_tenure_years,
};
pub use ledger::{LedgerTotals, remaining_balance, summarize_ledger, used_days};
pub use medical::{ExamKind, ExamReminder, ExamStatus, exam_reminders, exam_status};
pub use prior_experience::{PriorTenure, prior_tenure, total_prior_tenure_days};
pub use statement::{ENGINE_VERSION, build_leave_statement};
pub use tenure::{add_durations, service_summary, tenure_days_at_current_employer, tenure_since};
