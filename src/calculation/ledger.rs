//! Leave ledger reconciliation.
//!
//! Usage records consume their inclusive day count. Adjustment records are
//! subtracted from the used total, so a positive adjustment raises the
//! remaining balance. The ledger is an undated running balance and is never
//! reset by year.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Employee, LeaveLedgerEntry, LedgerEntryKind};

use super::entitlement::{EntitlementInput, calculate_entitlement};

/// Totals over one employee's ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerTotals {
    /// Days consumed by valid usage records.
    pub usage_days: i64,
    /// Net signed days of all adjustment records.
    pub adjustment_days: i64,
    /// `usage_days - adjustment_days`.
    pub used_days: i64,
    /// Ids of usage records skipped because they end before they start.
    pub skipped_entries: Vec<u64>,
}

/// Reconciles a ledger into its totals.
///
/// Inverted usage ranges are excluded and reported in `skipped_entries`;
/// they are never reordered.
pub fn summarize_ledger(entries: &[LeaveLedgerEntry]) -> LedgerTotals {
    let mut totals = LedgerTotals::default();

    for entry in entries {
        match &entry.kind {
            LedgerEntryKind::Usage { .. } => match entry.kind.usage_days() {
                Some(days) => totals.usage_days += days,
                None => {
                    debug!(entry_id = entry.id, "Skipping usage record with inverted range");
                    totals.skipped_entries.push(entry.id);
                }
            },
            LedgerEntryKind::Adjustment { signed_days, .. } => {
                totals.adjustment_days += signed_days;
            }
        }
    }

    totals.used_days = totals.usage_days - totals.adjustment_days;
    totals
}

/// Returns the net number of leave days used.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::used_days;
/// use leave_engine::models::{LeaveLedgerEntry, LedgerEntryKind};
/// use chrono::NaiveDate;
///
/// let entries = vec![
///     LeaveLedgerEntry {
///         id: 1,
///         kind: LedgerEntryKind::usage(
///             NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///             NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///         ),
///     },
///     LeaveLedgerEntry {
///         id: 2,
///         kind: LedgerEntryKind::Adjustment {
///             effective_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
///             signed_days: 3,
///             note: None,
///         },
///     },
/// ];
/// assert_eq!(used_days(&entries), 2);
/// ```
pub fn used_days(entries: &[LeaveLedgerEntry]) -> i64 {
    summarize_ledger(entries).used_days
}

/// Returns the annual entitlement minus used days.
///
/// The result may be negative. Warning about an overdrawn balance is left to
/// the caller.
pub fn remaining_balance(employee: &Employee, entries: &[LeaveLedgerEntry], as_of: NaiveDate) -> i64 {
    let entitlement = calculate_entitlement(&EntitlementInput::from(employee), as_of, 1);
    entitlement.days() - used_days(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn usage(id: u64, start: NaiveDate, end: NaiveDate) -> LeaveLedgerEntry {
        LeaveLedgerEntry {
            id,
            kind: LedgerEntryKind::usage(start, end),
        }
    }

    fn adjustment(id: u64, signed_days: i64) -> LeaveLedgerEntry {
        LeaveLedgerEntry {
            id,
            kind: LedgerEntryKind::Adjustment {
                effective_date: date(2024, 3, 1),
                signed_days,
                note: None,
            },
        }
    }

    #[test]
    fn test_empty_ledger_uses_nothing() {
        assert_eq!(used_days(&[]), 0);
    }

    #[test]
    fn test_usage_minus_positive_adjustment() {
        let entries = vec![
            usage(1, date(2024, 1, 1), date(2024, 1, 5)),
            adjustment(2, 3),
        ];
        assert_eq!(used_days(&entries), 2);
    }

    #[test]
    fn test_negative_adjustment_increases_used() {
        let entries = vec![usage(1, date(2024, 1, 1), date(2024, 1, 1)), adjustment(2, -4)];
        assert_eq!(used_days(&entries), 5);
    }

    #[test]
    fn test_grant_only_ledger_is_negative_used() {
        assert_eq!(used_days(&[adjustment(1, 5)]), -5);
    }

    #[test]
    fn test_inverted_usage_is_skipped() {
        let entries = vec![
            usage(1, date(2024, 1, 10), date(2024, 1, 1)),
            usage(2, date(2024, 2, 1), date(2024, 2, 2)),
        ];
        let totals = summarize_ledger(&entries);
        assert_eq!(totals.usage_days, 2);
        assert_eq!(totals.used_days, 2);
        assert_eq!(totals.skipped_entries, vec![1]);
    }

    #[test]
    fn test_usage_spans_years_without_reset() {
        let entries = vec![
            usage(1, date(2023, 12, 30), date(2024, 1, 2)),
            usage(2, date(2022, 7, 1), date(2022, 7, 10)),
        ];
        assert_eq!(used_days(&entries), 4 + 10);
    }

    #[test]
    fn test_remaining_balance_can_go_negative() {
        let employee = Employee::new("emp_001", "Ana Horvat", date(2024, 1, 1));
        let entries = vec![usage(1, date(2024, 6, 1), date(2024, 6, 25))];
        assert_eq!(remaining_balance(&employee, &entries, date(2025, 1, 1)), 20 - 25);
    }

    #[test]
    fn test_remaining_balance_with_grant() {
        let mut employee = Employee::new("emp_001", "Ana Horvat", date(2024, 1, 1));
        employee.children_under_15 = 1;
        let entries = vec![
            usage(1, date(2024, 6, 1), date(2024, 6, 10)),
            adjustment(2, 5),
        ];
        assert_eq!(remaining_balance(&employee, &entries, date(2025, 1, 1)), 21 - 5);
    }
}
