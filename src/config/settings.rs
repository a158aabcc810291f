//! User settings for the budget calculator
//!
//! Settings shape how the session starts and how amounts are rendered.
//! They are read once at startup and never written back: nothing about a
//! session outlives it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Currency symbol placed before amounts
    pub currency_symbol: String,

    /// Digit group separator ("1.234")
    pub thousands_separator: char,

    /// Separator before the cents ("0,50")
    pub decimal_separator: char,

    /// Start from the example incomes and expenses instead of empty lists
    pub seed_on_start: bool,

    /// Print the "Atualizado em" date above the summary
    pub show_date: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
            seed_on_start: true,
            show_date: true,
        }
    }
}

impl Settings {
    /// Load settings from a JSON or YAML file, or use defaults if it doesn't exist
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as
    /// JSON. Fields missing from the file keep their defaults.
    pub fn load_or_default(path: &Path) -> BudgetResult<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            BudgetError::Io(format!("Failed to read settings file {}: {}", path.display(), e))
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let settings: Settings = if is_yaml {
            serde_yaml::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?
        } else {
            serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Reject separator choices that would make amounts unreadable
    pub fn validate(&self) -> BudgetResult<()> {
        if self.thousands_separator == self.decimal_separator {
            return Err(BudgetError::Config(format!(
                "thousands and decimal separators must differ (both are '{}')",
                self.decimal_separator
            )));
        }
        if self.decimal_separator.is_ascii_digit() || self.thousands_separator.is_ascii_digit() {
            return Err(BudgetError::Config("separators cannot be digits".into()));
        }
        Ok(())
    }
}
