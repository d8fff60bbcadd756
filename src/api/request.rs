//! Request types for the leave engine API.
//!
//! This module defines the JSON request bodies and query strings accepted by
//! the HTTP endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AdjustmentOperation, Employee, LeaveLedgerEntry, LedgerEntryKind};

/// Request body for the stateless `/statement` endpoint.
///
/// Carries the whole employee record and ledger, so nothing needs to be
/// stored beforehand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementRequest {
    /// The employee record.
    pub employee: Employee,
    /// The employee's ledger.
    #[serde(default)]
    pub ledger: Vec<LedgerEntryRequest>,
    /// Reference date; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// A ledger entry in a statement request.
///
/// The id is optional; entries without one are numbered by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntryRequest {
    /// Entry id, if the caller has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// The record payload.
    #[serde(flatten)]
    pub kind: LedgerEntryKind,
}

impl StatementRequest {
    /// Returns the ledger with every entry carrying an id.
    pub fn ledger_entries(&self) -> Vec<LeaveLedgerEntry> {
        self.ledger
            .iter()
            .enumerate()
            .map(|(index, entry)| LeaveLedgerEntry {
                id: entry.id.unwrap_or(index as u64 + 1),
                kind: entry.kind.clone(),
            })
            .collect()
    }
}

/// Request body for recording leave taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRequest {
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
}

/// Request body for a manual balance correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentRequest {
    /// Number of days, always non-negative.
    pub days: u32,
    /// Whether the days are granted or taken away.
    #[serde(default = "default_operation")]
    pub operation: AdjustmentOperation,
    /// When the correction applies; defaults to today.
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
    /// Free-text reason.
    #[serde(default)]
    pub note: Option<String>,
}

fn default_operation() -> AdjustmentOperation {
    AdjustmentOperation::Add
}

/// Query string carrying an optional reference date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsOfQuery {
    /// Reference date; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Query string for the medical reminders endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReminderQuery {
    /// Reference date; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// Overrides the configured reminder window.
    #[serde(default)]
    pub window_days: Option<i64>,
}
