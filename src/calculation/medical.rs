//! Medical examination due dates.
//!
//! Each employee carries a physical and a psychological examination
//! schedule. This module classifies a schedule against a date and collects
//! the examinations HR needs to act on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, ExamSchedule};

/// The kind of medical examination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamKind {
    /// Physical fitness examination.
    Physical,
    /// Psychological examination.
    Psychological,
}

/// Where an examination stands relative to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExamStatus {
    /// The role does not require this examination.
    NotRequired,
    /// Required but no due date is recorded.
    NotScheduled,
    /// The due date has passed.
    Overdue {
        /// Days since the due date.
        days_overdue: i64,
    },
    /// Due today or within the reminder window.
    DueSoon {
        /// Days until the due date.
        days_remaining: i64,
    },
    /// Due after the reminder window.
    Scheduled {
        /// Days until the due date.
        days_remaining: i64,
    },
}

impl ExamStatus {
    /// Returns true if HR should act on this examination.
    pub fn needs_attention(&self) -> bool {
        matches!(
            self,
            ExamStatus::NotScheduled | ExamStatus::Overdue { .. } | ExamStatus::DueSoon { .. }
        )
    }
}

/// An examination that needs attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamReminder {
    /// The employee the examination belongs to.
    pub employee_id: String,
    /// The employee's name.
    pub employee_name: String,
    /// Which examination.
    pub kind: ExamKind,
    /// When it is due, if known.
    pub due_date: Option<NaiveDate>,
    /// Its status on the evaluation date.
    #[serde(flatten)]
    pub status: ExamStatus,
}

/// Classifies an examination schedule.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::{ExamStatus, exam_status};
/// use leave_engine::models::ExamSchedule;
/// use chrono::NaiveDate;
///
/// let schedule = ExamSchedule {
///     required: true,
///     last_date: None,
///     next_date: NaiveDate::from_ymd_opt(2025, 6, 10),
/// };
/// let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// assert_eq!(
///     exam_status(&schedule, as_of, 30),
///     ExamStatus::DueSoon { days_remaining: 9 }
/// );
/// ```
pub fn exam_status(schedule: &ExamSchedule, as_of: NaiveDate, reminder_window_days: i64) -> ExamStatus {
    if !schedule.required {
        return ExamStatus::NotRequired;
    }
    let Some(due) = schedule.next_date else {
        return ExamStatus::NotScheduled;
    };

    let days_remaining = (due - as_of).num_days();
    if days_remaining < 0 {
        ExamStatus::Overdue {
            days_overdue: -days_remaining,
        }
    } else if days_remaining <= reminder_window_days {
        ExamStatus::DueSoon { days_remaining }
    } else {
        ExamStatus::Scheduled { days_remaining }
    }
}

/// Lists required examinations that are overdue, due within the window, or
/// not scheduled.
///
/// Reminders are ordered by due date, earliest first; unscheduled
/// examinations come last, ordered by employee id.
pub fn exam_reminders(
    employees: &[Employee],
    as_of: NaiveDate,
    reminder_window_days: i64,
) -> Vec<ExamReminder> {
    let mut reminders: Vec<ExamReminder> = employees
        .iter()
        .flat_map(|employee| {
            [
                (ExamKind::Physical, &employee.medical.physical),
                (ExamKind::Psychological, &employee.medical.psychological),
            ]
            .into_iter()
            .filter_map(move |(kind, schedule)| {
                let status = exam_status(schedule, as_of, reminder_window_days);
                status.needs_attention().then(|| ExamReminder {
                    employee_id: employee.id.clone(),
                    employee_name: employee.name.clone(),
                    kind,
                    due_date: schedule.next_date,
                    status,
                })
            })
        })
        .collect();

    reminders.sort_by(|a, b| {
        let a_key = (a.due_date.is_none(), a.due_date, &a.employee_id);
        let b_key = (b.due_date.is_none(), b.due_date, &b.employee_id);
        a_key.cmp(&b_key)
    });
    reminders
}
