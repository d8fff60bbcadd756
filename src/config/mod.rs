//! Configuration loading and management for the leave engine.
//!
//! This module provides functionality to load the engine configuration from
//! a YAML file: medical reminder windows, ledger warnings and the date
//! formats accepted when importing records.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Accepted date formats: {:?}", config.records().date_formats);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{EngineConfig, LedgerSettings, MedicalSettings, RecordSettings};
