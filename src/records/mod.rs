//! Employee record import.
//!
//! Reads an employee roster (employees, prior jobs, leave rows and medical
//! dates) from YAML with textual dates, converts it into the typed models
//! and reports rows that could not be read instead of failing the import.

mod dates;
mod loader;

pub use dates::{parse_date, parse_optional_date};
pub use loader::{ImportIssue, ImportReport, ImportedEmployee, RecordsLoader};
