//! Path management for the budget calculator
//!
//! Only the settings file has a location; budget data never touches disk.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_CALC_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (`~/.config/budget-calc` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{BudgetError, BudgetResult};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "BUDGET_CALC_CONFIG_DIR";

/// Settings file names, in lookup order
const SETTINGS_FILE_NAMES: &[&str] = &["settings.json", "settings.yaml", "settings.yml"];

/// Locates the configuration directory
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    config_dir: PathBuf,
}

impl ConfigPaths {
    /// Resolve the config directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> BudgetResult<Self> {
        if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(Self::with_config_dir(PathBuf::from(custom)));
        }

        let dirs = ProjectDirs::from("", "", "budget-calc").ok_or_else(|| {
            BudgetError::Config("Could not determine the user's config directory".into())
        })?;
        Ok(Self::with_config_dir(dirs.config_dir().to_path_buf()))
    }

    /// Use an explicit config directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// The settings file to read
    ///
    /// The first existing file among `settings.json`, `settings.yaml` and
    /// `settings.yml`; `settings.json` when none exists.
    pub fn settings_file(&self) -> PathBuf {
        SETTINGS_FILE_NAMES
            .iter()
            .map(|name| self.config_dir.join(name))
            .find(|path| path.exists())
            .unwrap_or_else(|| self.config_dir.join(SETTINGS_FILE_NAMES[0]))
    }
}
