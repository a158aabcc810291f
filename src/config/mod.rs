//! Configuration module for the budget calculator
//!
//! This module provides:
//! - Config directory resolution
//! - Read-only user settings (currency formatting, starting state)

pub mod paths;
pub mod settings;

pub use paths::ConfigPaths;
pub use settings::Settings;
