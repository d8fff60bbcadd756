//! Tenure and statutory annual leave engine.
//!
//! This crate computes calendar-accurate employment tenure, combines it with
//! prior experience, derives the annual leave entitlement from the statutory
//! rules, and reconciles it against a per-employee ledger of leave taken and
//! manual corrections. Statements carry an audit trace of every rule applied.
//!
//! Around the calculations sit an employee store, a fail-soft importer for
//! rosters with historical date formats, medical examination reminders and
//! an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod records;
pub mod store;
