//! Core data models for the leave engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod leave_ledger;
mod leave_statement;
mod tenure;

pub use employee::{Employee, ExamSchedule, MedicalExams, PriorJob};
pub use leave_ledger::{AdjustmentOperation, LeaveLedgerEntry, LedgerEntryKind};
pub use leave_statement::{
    AuditStep, AuditTrace, AuditWarning, EntitlementBreakdown, LeaveStatement, ServiceSummary,
};
pub use tenure::{DAYS_PER_MONTH, DAYS_PER_YEAR, MONTHS_PER_YEAR, Tenure};
