//! The repository seam between calculations and storage.

use crate::error::EngineResult;
use crate::models::{Employee, LeaveLedgerEntry, LedgerEntryKind};

/// Storage for employees and their leave ledgers.
///
/// Implementations own id assignment for ledger entries and must remove an
/// employee's ledger together with the employee.
pub trait EmployeeRepository {
    /// Returns the employee with the given id.
    ///
    /// # Errors
    ///
    /// `EmployeeNotFound` if no such employee exists.
    fn get_employee(&self, id: &str) -> EngineResult<Employee>;

    /// Returns every employee ordered by id.
    fn list_employees(&self) -> Vec<Employee>;

    /// Stores a new employee.
    ///
    /// # Errors
    ///
    /// - `InvalidEmployee` if the id or name is blank
    /// - `DuplicateEmployee` if the id is already taken
    fn add_employee(&mut self, employee: Employee) -> EngineResult<()>;

    /// Replaces an existing employee record; the ledger is kept.
    ///
    /// # Errors
    ///
    /// `EmployeeNotFound` if no such employee exists.
    fn update_employee(&mut self, employee: Employee) -> EngineResult<()>;

    /// Removes an employee and their whole ledger, returning the removed
    /// record.
    fn delete_employee(&mut self, id: &str) -> EngineResult<Employee>;

    /// Returns the employee's ledger in insertion order.
    fn list_ledger_entries(&self, employee_id: &str) -> EngineResult<Vec<LeaveLedgerEntry>>;

    /// Appends an entry to the employee's ledger and returns it with its
    /// assigned id.
    fn append_ledger_entry(
        &mut self,
        employee_id: &str,
        kind: LedgerEntryKind,
    ) -> EngineResult<LeaveLedgerEntry>;

    /// Removes one ledger entry.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if the employee does not exist
    /// - `LedgerEntryNotFound` if the entry is not in that employee's ledger
    fn delete_ledger_entry(&mut self, employee_id: &str, entry_id: u64)
    -> EngineResult<LeaveLedgerEntry>;
}
