//! Employee and ledger storage.
//!
//! Calculations never touch storage directly; the API layer and the record
//! importer go through [`EmployeeRepository`]. [`InMemoryStore`] is the
//! implementation the service runs with.

mod memory;
mod repository;

pub use memory::InMemoryStore;
pub use repository::EmployeeRepository;
