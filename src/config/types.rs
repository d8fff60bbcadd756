//! Configuration types for the leave engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `engine.yaml`. The leave rule table itself is fixed
//! and is not part of the configuration.

use serde::Deserialize;

/// Medical examination reminder settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MedicalSettings {
    /// How many days ahead an examination counts as due soon.
    pub reminder_window_days: i64,
}

impl Default for MedicalSettings {
    fn default() -> Self {
        Self {
            reminder_window_days: 30,
        }
    }
}

/// Leave ledger settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LedgerSettings {
    /// Whether statements carry a warning when leave is overdrawn.
    pub warn_on_negative_balance: bool,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            warn_on_negative_balance: true,
        }
    }
}

/// Settings for importing textual records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecordSettings {
    /// `chrono` format strings tried in order when parsing a date.
    pub date_formats: Vec<String>,
}

impl Default for RecordSettings {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(),
                "%d.%m.%Y.".to_string(),
                "%d/%m/%Y".to_string(),
            ],
        }
    }
}

/// The complete engine configuration loaded from `engine.yaml`.
///
/// Every section is optional in the file and falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Medical examination reminders.
    pub medical: MedicalSettings,
    /// Leave ledger behaviour.
    pub ledger: LedgerSettings,
    /// Record import.
    pub records: RecordSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: EngineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.medical.reminder_window_days, 30);
        assert!(config.ledger.warn_on_negative_balance);
        assert_eq!(config.records.date_formats.len(), 3);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let yaml = "medical:\n  reminder_window_days: 14\n";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.medical.reminder_window_days, 14);
        assert_eq!(config.ledger, LedgerSettings::default());
    }
}
