//! Roster import.
//!
//! This module provides the [`RecordsLoader`] type for reading an employee
//! roster from a YAML file whose dates are text in any of the configured
//! formats. Import is fail-soft: a row with an unreadable date or a blank
//! id or name is skipped and reported as an [`ImportIssue`], and the rest
//! of the roster still loads.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::RecordSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, ExamSchedule, LedgerEntryKind, MedicalExams, PriorJob};
use crate::store::EmployeeRepository;

use super::dates::{parse_date, parse_optional_date};

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    employees: Vec<RawEmployee>,
}

#[derive(Debug, Deserialize)]
struct RawEmployee {
    id: String,
    name: String,
    #[serde(default)]
    oib: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    birth_date: Option<String>,
    hire_date: String,
    #[serde(default)]
    previous_experience_days: Option<i64>,
    #[serde(default)]
    prior_jobs: Vec<RawPriorJob>,
    #[serde(default)]
    disability: bool,
    #[serde(default)]
    children_under_15: u32,
    #[serde(default)]
    sole_caregiver: bool,
    #[serde(default = "default_required")]
    physical_required: bool,
    #[serde(default = "default_required")]
    psych_required: bool,
    #[serde(default)]
    last_physical_date: Option<String>,
    #[serde(default)]
    next_physical_date: Option<String>,
    #[serde(default)]
    last_psych_date: Option<String>,
    #[serde(default)]
    next_psych_date: Option<String>,
    #[serde(default)]
    leave_records: Vec<RawLeaveRecord>,
}

fn default_required() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RawPriorJob {
    company: String,
    start_date: String,
    end_date: String,
}

/// A leave row as stored historically: adjustments carry a day count and
/// use the start date as their effective date.
#[derive(Debug, Deserialize)]
struct RawLeaveRecord {
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    days_adjustment: Option<i64>,
    #[serde(default)]
    note: Option<String>,
}

/// A problem found in one row of the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportIssue {
    /// The employee the row belongs to.
    pub employee_id: String,
    /// The field or row that was rejected (e.g. `hire_date`, `leave_records[2]`).
    pub field: String,
    /// What went wrong and what was done about it.
    pub message: String,
}

/// An employee read from the roster together with their ledger rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedEmployee {
    /// The employee record.
    pub employee: Employee,
    /// Ledger rows in file order.
    pub ledger: Vec<LedgerEntryKind>,
}

/// The outcome of reading a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Employees that were read.
    pub employees: Vec<ImportedEmployee>,
    /// Rows that were skipped or partially read.
    pub issues: Vec<ImportIssue>,
}

impl ImportReport {
    /// Writes every imported employee and their ledger into a repository.
    ///
    /// An employee the repository refuses (for example an id that is already
    /// stored) is recorded in [`ImportReport::issues`] and the rest are still
    /// written. Returns the number of employees added.
    pub fn populate<R: EmployeeRepository + ?Sized>(&mut self, repository: &mut R) -> usize {
        let mut added = 0;
        let mut failures = Vec::new();

        for imported in &self.employees {
            let employee_id = imported.employee.id.as_str();
            if let Err(err) = repository.add_employee(imported.employee.clone()) {
                failures.push((
                    employee_id.to_string(),
                    "id".to_string(),
                    format!("{}; employee not stored", err),
                ));
                continue;
            }
            added += 1;

            for (index, kind) in imported.ledger.iter().enumerate() {
                if let Err(err) = repository.append_ledger_entry(employee_id, kind.clone()) {
                    failures.push((
                        employee_id.to_string(),
                        format!("ledger[{}]", index),
                        format!("{}; entry not stored", err),
                    ));
                }
            }
        }

        for (employee_id, field, message) in failures {
            self.push_issue(&employee_id, field, message);
        }
        added
    }
}

/// Reads employee rosters.
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::RecordSettings;
/// use leave_engine::records::RecordsLoader;
/// use leave_engine::store::InMemoryStore;
///
/// let mut report = RecordsLoader::load("./roster.yaml", &RecordSettings::default())?;
/// for issue in &report.issues {
///     eprintln!("{}: {} ({})", issue.employee_id, issue.field, issue.message);
/// }
///
/// let mut store = InMemoryStore::new();
/// let added = report.populate(&mut store);
/// println!("{} employees stored", added);
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
pub struct RecordsLoader;

impl RecordsLoader {
    /// Reads a roster file.
    ///
    /// Fails only if the file is missing or is not a roster at all; bad rows
    /// end up in [`ImportReport::issues`].
    pub fn load<P: AsRef<Path>>(path: P, settings: &RecordSettings) -> EngineResult<ImportReport> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::RecordsNotFound {
            path: path_str.clone(),
        })?;

        let report = Self::parse_str(&content, settings).map_err(|e| match e {
            EngineError::RecordsParseError { message, .. } => EngineError::RecordsParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(
            path = %path_str,
            employees = report.employees.len(),
            issues = report.issues.len(),
            "Imported employee records"
        );
        Ok(report)
    }

    /// Reads a roster from YAML text.
    pub fn parse_str(content: &str, settings: &RecordSettings) -> EngineResult<ImportReport> {
        let roster: RosterFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::RecordsParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        let formats = &settings.date_formats;
        let mut report = ImportReport::default();
        let mut seen_ids: HashSet<String> = HashSet::new();

        for raw in roster.employees {
            if !seen_ids.insert(raw.id.clone()) {
                report.push_issue(&raw.id, "id", "duplicate employee id; row skipped");
                continue;
            }
            if let Some(imported) = convert_employee(raw, formats, &mut report) {
                report.employees.push(imported);
            }
        }

        Ok(report)
    }
}

impl ImportReport {
    fn push_issue(&mut self, employee_id: &str, field: impl Into<String>, message: impl Into<String>) {
        let issue = ImportIssue {
            employee_id: employee_id.to_string(),
            field: field.into(),
            message: message.into(),
        };
        warn!(
            employee_id = %issue.employee_id,
            field = %issue.field,
            message = %issue.message,
            "Skipped part of imported record"
        );
        self.issues.push(issue);
    }

    /// Parses an optional date, recording an issue and yielding `None` when
    /// the text is unreadable.
    fn optional_date(
        &mut self,
        employee_id: &str,
        field: &str,
        value: Option<&str>,
        formats: &[String],
    ) -> Option<chrono::NaiveDate> {
        match parse_optional_date(value, formats) {
            Ok(date) => date,
            Err(err) => {
                self.push_issue(employee_id, field, format!("{}; left empty", err));
                None
            }
        }
    }
}

fn convert_employee(
    raw: RawEmployee,
    formats: &[String],
    report: &mut ImportReport,
) -> Option<ImportedEmployee> {
    let id = raw.id;

    if id.trim().is_empty() {
        report.push_issue(&id, "id", "must not be blank; employee skipped");
        return None;
    }
    if raw.name.trim().is_empty() {
        report.push_issue(&id, "name", "must not be blank; employee skipped");
        return None;
    }

    let hire_date = match parse_date(&raw.hire_date, formats) {
        Ok(date) => date,
        Err(err) => {
            report.push_issue(&id, "hire_date", format!("{}; employee skipped", err));
            return None;
        }
    };

    let birth_date = report.optional_date(&id, "birth_date", raw.birth_date.as_deref(), formats);
    let medical = MedicalExams {
        physical: ExamSchedule {
            required: raw.physical_required,
            last_date: report.optional_date(
                &id,
                "last_physical_date",
                raw.last_physical_date.as_deref(),
                formats,
            ),
            next_date: report.optional_date(
                &id,
                "next_physical_date",
                raw.next_physical_date.as_deref(),
                formats,
            ),
        },
        psychological: ExamSchedule {
            required: raw.psych_required,
            last_date: report.optional_date(
                &id,
                "last_psych_date",
                raw.last_psych_date.as_deref(),
                formats,
            ),
            next_date: report.optional_date(
                &id,
                "next_psych_date",
                raw.next_psych_date.as_deref(),
                formats,
            ),
        },
    };

    let mut prior_jobs = Vec::with_capacity(raw.prior_jobs.len());
    for (index, job) in raw.prior_jobs.into_iter().enumerate() {
        let field = format!("prior_jobs[{}]", index);
        match (
            parse_date(&job.start_date, formats),
            parse_date(&job.end_date, formats),
        ) {
            (Ok(start_date), Ok(end_date)) => prior_jobs.push(PriorJob {
                company: job.company,
                start_date,
                end_date,
            }),
            (Err(err), _) | (_, Err(err)) => {
                report.push_issue(&id, field, format!("{}; prior job skipped", err));
            }
        }
    }

    let mut ledger = Vec::with_capacity(raw.leave_records.len());
    for (index, record) in raw.leave_records.into_iter().enumerate() {
        let field = format!("leave_records[{}]", index);
        match convert_leave_record(record, formats) {
            Ok(kind) => ledger.push(kind),
            Err(err) => report.push_issue(&id, field, format!("{}; leave record skipped", err)),
        }
    }

    let employee = Employee {
        id,
        name: raw.name,
        oib: raw.oib,
        address: raw.address,
        birth_date,
        hire_date,
        previous_experience_days: raw.previous_experience_days,
        prior_jobs,
        disability: raw.disability,
        children_under_15: raw.children_under_15,
        sole_caregiver: raw.sole_caregiver,
        medical,
    };

    Some(ImportedEmployee { employee, ledger })
}

fn convert_leave_record(record: RawLeaveRecord, formats: &[String]) -> EngineResult<LedgerEntryKind> {
    let start = parse_optional_date(record.start_date.as_deref(), formats)?;

    if let Some(signed_days) = record.days_adjustment {
        let effective_date = start.ok_or_else(|| EngineError::InvalidLedgerEntry {
            message: "adjustment has no effective date".to_string(),
        })?;
        return Ok(LedgerEntryKind::Adjustment {
            effective_date,
            signed_days,
            note: record.note,
        });
    }

    let end = parse_optional_date(record.end_date.as_deref(), formats)?;
    match (start, end) {
        (Some(start_date), Some(end_date)) => Ok(LedgerEntryKind::Usage {
            start_date,
            end_date,
        }),
        _ => Err(EngineError::InvalidLedgerEntry {
            message: "usage record needs both a start and an end date".to_string(),
        }),
    }
}
