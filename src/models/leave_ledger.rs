//! Leave ledger models.
//!
//! The ledger is an append-only list of entries per employee. Every entry is
//! either leave actually taken (a usage record over a date range) or a manual
//! correction of the balance (an adjustment record).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a manual balance correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentOperation {
    /// Grants days; raises the remaining balance.
    Add,
    /// Takes days away; lowers the remaining balance.
    Subtract,
}

/// The payload of a ledger entry.
///
/// # Example
///
/// ```
/// use leave_engine::models::{AdjustmentOperation, LedgerEntryKind};
/// use chrono::NaiveDate;
///
/// let effective = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// let grant = LedgerEntryKind::adjustment(5, AdjustmentOperation::Add, effective, None);
/// assert_eq!(grant.signed_days(), Some(5));
///
/// let taken = LedgerEntryKind::adjustment(2, AdjustmentOperation::Subtract, effective, None);
/// assert_eq!(taken.signed_days(), Some(-2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEntryKind {
    /// Days taken as leave, inclusive of both ends.
    Usage {
        /// First day of leave.
        start_date: NaiveDate,
        /// Last day of leave.
        end_date: NaiveDate,
    },
    /// A manual correction. Positive values increase the remaining balance.
    Adjustment {
        /// When the correction was recorded.
        effective_date: NaiveDate,
        /// Signed number of days.
        signed_days: i64,
        /// Free-text reason for the correction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl LedgerEntryKind {
    /// Creates a usage record.
    pub fn usage(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        LedgerEntryKind::Usage {
            start_date,
            end_date,
        }
    }

    /// Creates an adjustment record from an unsigned day count and its
    /// direction.
    pub fn adjustment(
        days: u32,
        operation: AdjustmentOperation,
        effective_date: NaiveDate,
        note: Option<String>,
    ) -> Self {
        let days = i64::from(days);
        let signed_days = match operation {
            AdjustmentOperation::Add => days,
            AdjustmentOperation::Subtract => -days,
        };
        LedgerEntryKind::Adjustment {
            effective_date,
            signed_days,
            note,
        }
    }

    /// Returns the inclusive day count of a usage record.
    ///
    /// Returns `None` for adjustments and for usage ranges that end before
    /// they start.
    pub fn usage_days(&self) -> Option<i64> {
        match self {
            LedgerEntryKind::Usage {
                start_date,
                end_date,
            } if end_date >= start_date => Some((*end_date - *start_date).num_days() + 1),
            _ => None,
        }
    }

    /// Returns the signed day count of an adjustment record.
    pub fn signed_days(&self) -> Option<i64> {
        match self {
            LedgerEntryKind::Adjustment { signed_days, .. } => Some(*signed_days),
            LedgerEntryKind::Usage { .. } => None,
        }
    }

    /// Returns true for usage records.
    pub fn is_usage(&self) -> bool {
        matches!(self, LedgerEntryKind::Usage { .. })
    }
}

/// A stored ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveLedgerEntry {
    /// Identifier, unique within the employee's ledger.
    pub id: u64,
    /// The record payload.
    #[serde(flatten)]
    pub kind: LedgerEntryKind,
}
