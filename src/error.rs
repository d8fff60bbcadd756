//! Error types for the leave engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur while loading configuration, importing
//! records and operating on the employee store. The calculations themselves
//! never fail; they degrade and report warnings instead.

use thiserror::Error;

/// The main error type for the leave engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Records file was not found at the specified path.
    #[error("Records file not found: {path}")]
    RecordsNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Records file was not valid YAML or did not match the roster layout.
    #[error("Failed to parse records file '{path}': {message}")]
    RecordsParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// An employee with the given id already exists.
    #[error("Employee already exists: {id}")]
    DuplicateEmployee {
        /// The conflicting id.
        id: String,
    },

    /// No ledger entry with the given id exists for the employee.
    #[error("Ledger entry {entry_id} not found for employee '{employee_id}'")]
    LedgerEntryNotFound {
        /// The employee whose ledger was searched.
        employee_id: String,
        /// The entry id that was not found.
        entry_id: u64,
    },

    /// A ledger entry was rejected before being appended.
    #[error("Invalid ledger entry: {message}")]
    InvalidLedgerEntry {
        /// A description of what made the entry invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A textual date matched none of the accepted formats.
    #[error("Unrecognised date: '{value}'")]
    InvalidDate {
        /// The text that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
