//! In-memory repository.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, LeaveLedgerEntry, LedgerEntryKind};

use super::repository::EmployeeRepository;

/// A repository that keeps everything in ordered maps.
///
/// Ledger entry ids come from one counter shared by all employees, so an id
/// is never reused, even after deletion.
///
/// # Example
///
/// ```
/// use leave_engine::models::{Employee, LedgerEntryKind};
/// use leave_engine::store::{EmployeeRepository, InMemoryStore};
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2018, 4, 1).unwrap();
/// let mut store = InMemoryStore::new();
/// store.add_employee(Employee::new("emp_001", "Ana Horvat", hired))?;
///
/// let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 7, 5).unwrap();
/// let entry = store.append_ledger_entry("emp_001", LedgerEntryKind::usage(start, end))?;
/// assert_eq!(entry.id, 1);
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct InMemoryStore {
    employees: BTreeMap<String, Employee>,
    ledgers: BTreeMap<String, Vec<LeaveLedgerEntry>>,
    next_entry_id: u64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            employees: BTreeMap::new(),
            ledgers: BTreeMap::new(),
            next_entry_id: 1,
        }
    }

    /// Number of stored employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employees are stored.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn ensure_exists(&self, employee_id: &str) -> EngineResult<()> {
        if self.employees.contains_key(employee_id) {
            Ok(())
        } else {
            Err(EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })
        }
    }
}

fn validate(employee: &Employee) -> EngineResult<()> {
    if employee.id.trim().is_empty() {
        return Err(EngineError::InvalidEmployee {
            field: "id".to_string(),
            message: "must not be blank".to_string(),
        });
    }
    if employee.name.trim().is_empty() {
        return Err(EngineError::InvalidEmployee {
            field: "name".to_string(),
            message: "must not be blank".to_string(),
        });
    }
    Ok(())
}

impl EmployeeRepository for InMemoryStore {
    fn get_employee(&self, id: &str) -> EngineResult<Employee> {
        self.employees
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    fn list_employees(&self) -> Vec<Employee> {
        self.employees.values().cloned().collect()
    }

    fn add_employee(&mut self, employee: Employee) -> EngineResult<()> {
        validate(&employee)?;
        if self.employees.contains_key(&employee.id) {
            return Err(EngineError::DuplicateEmployee { id: employee.id });
        }
        debug!(employee_id = %employee.id, "Adding employee");
        self.ledgers.insert(employee.id.clone(), Vec::new());
        self.employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    fn update_employee(&mut self, employee: Employee) -> EngineResult<()> {
        validate(&employee)?;
        match self.employees.get_mut(&employee.id) {
            Some(existing) => {
                *existing = employee;
                Ok(())
            }
            None => Err(EngineError::EmployeeNotFound { id: employee.id }),
        }
    }

    fn delete_employee(&mut self, id: &str) -> EngineResult<Employee> {
        let employee = self
            .employees
            .remove(id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;
        let removed = self.ledgers.remove(id).map(|l| l.len()).unwrap_or(0);
        debug!(employee_id = %id, ledger_entries = removed, "Deleted employee and ledger");
        Ok(employee)
    }

    fn list_ledger_entries(&self, employee_id: &str) -> EngineResult<Vec<LeaveLedgerEntry>> {
        self.ensure_exists(employee_id)?;
        Ok(self.ledgers.get(employee_id).cloned().unwrap_or_default())
    }

    fn append_ledger_entry(
        &mut self,
        employee_id: &str,
        kind: LedgerEntryKind,
    ) -> EngineResult<LeaveLedgerEntry> {
        self.ensure_exists(employee_id)?;
        let entry = LeaveLedgerEntry {
            id: self.next_entry_id,
            kind,
        };
        self.next_entry_id += 1;
        self.ledgers
            .entry(employee_id.to_string())
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }

    fn delete_ledger_entry(
        &mut self,
        employee_id: &str,
        entry_id: u64,
    ) -> EngineResult<LeaveLedgerEntry> {
        self.ensure_exists(employee_id)?;
        let not_found = || EngineError::LedgerEntryNotFound {
            employee_id: employee_id.to_string(),
            entry_id,
        };
        let ledger = self.ledgers.get_mut(employee_id).ok_or_else(not_found)?;
        let position = ledger
            .iter()
            .position(|entry| entry.id == entry_id)
            .ok_or_else(not_found)?;
        Ok(ledger.remove(position))
    }
}
