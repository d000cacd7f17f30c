//! Report settings
//!
//! Labels and names used when rendering the report. Every field has a
//! default, so a settings file only needs the fields it overrides. Settings
//! are read-only: nothing is written back between runs.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RoyaltyError;
use crate::models::ReportPeriod;

/// Report rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency prefix for on-screen amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Payer label for names missing from the payer directory
    #[serde(default = "default_empty_payer_label")]
    pub empty_payer_label: String,

    /// Name of the detail sheet
    #[serde(default = "default_detail_sheet")]
    pub detail_sheet_name: String,

    /// Name of the payer summary sheet
    #[serde(default = "default_summary_sheet")]
    pub summary_sheet_name: String,

    /// Label of the grand total row
    #[serde(default = "default_grand_total_label")]
    pub grand_total_label: String,

    /// Output file name before the period suffix and extension
    #[serde(default = "default_file_stem")]
    pub output_file_stem: String,
}

fn default_currency() -> String {
    "R$ ".to_string()
}

fn default_empty_payer_label() -> String {
    "(vazio)".to_string()
}

fn default_detail_sheet() -> String {
    "Plain Detail".to_string()
}

fn default_summary_sheet() -> String {
    "Summary".to_string()
}

fn default_grand_total_label() -> String {
    "Total Geral".to_string()
}

fn default_file_stem() -> String {
    "resumo_royalties".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            empty_payer_label: default_empty_payer_label(),
            detail_sheet_name: default_detail_sheet(),
            summary_sheet_name: default_summary_sheet(),
            grand_total_label: default_grand_total_label(),
            output_file_stem: default_file_stem(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, or the defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self, RoyaltyError> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|e| {
            RoyaltyError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            RoyaltyError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the spreadsheet writer cannot honour
    pub fn validate(&self) -> Result<(), RoyaltyError> {
        for (field, name) in [
            ("detail_sheet_name", &self.detail_sheet_name),
            ("summary_sheet_name", &self.summary_sheet_name),
        ] {
            if name.trim().is_empty() || name.chars().count() > 31 {
                return Err(RoyaltyError::Config(format!(
                    "{} must be 1 to 31 characters long",
                    field
                )));
            }
        }

        if self.detail_sheet_name == self.summary_sheet_name {
            return Err(RoyaltyError::Config(
                "detail and summary sheets need distinct names".into(),
            ));
        }

        if self.output_file_stem.trim().is_empty() {
            return Err(RoyaltyError::Config("output_file_stem is empty".into()));
        }

        Ok(())
    }

    /// Output file name, suffixed with the period when one is given
    pub fn output_file_name(&self, period: Option<&ReportPeriod>) -> String {
        match period {
            Some(period) => format!("{}_{}.xlsx", self.output_file_stem, period),
            None => format!("{}.xlsx", self.output_file_stem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "R$ ");
        assert_eq!(settings.empty_payer_label, "(vazio)");
        assert_eq!(settings.detail_sheet_name, "Plain Detail");
        assert_eq!(settings.summary_sheet_name, "Summary");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_output_file_name() {
        let settings = Settings::default();
        assert_eq!(settings.output_file_name(None), "resumo_royalties.xlsx");

        let period = ReportPeriod::parse("2024-03").unwrap();
        assert_eq!(
            settings.output_file_name(Some(&period)),
            "resumo_royalties_2024-03.xlsx"
        );
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "empty_payer_label": "(sem fonte)" }"#).unwrap();

        let loaded = Settings::load(Some(&path)).unwrap();
        assert_eq!(loaded.empty_payer_label, "(sem fonte)");
        assert_eq!(loaded.grand_total_label, "Total Geral");
    }

    #[test]
    fn test_load_without_file() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load(Some(&path)),
            Err(RoyaltyError::Config(_))
        ));
    }

    #[test]
    fn test_validate_sheet_names() {
        let settings = Settings {
            summary_sheet_name: "Plain Detail".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            detail_sheet_name: "x".repeat(32),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
