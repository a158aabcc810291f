//! Custom error types for the budget calculator
//!
//! The budgeting core itself never fails: bad numbers are coerced and stale
//! ids are ignored. These errors cover the ambient layers around it, namely
//! settings loading and the command reader of the terminal session.

use thiserror::Error;

/// The main error type for budget calculator operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A session command line that could not be understood
    #[error("Invalid command: {0}")]
    Command(String),
}

impl BudgetError {
    /// Create a command error from any displayable parse failure
    pub fn command(message: impl std::fmt::Display) -> Self {
        Self::Command(message.to_string())
    }

    /// Check if this is a command error
    pub fn is_command(&self) -> bool {
        matches!(self, Self::Command(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for BudgetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for budget calculator operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_command_error() {
        let err = BudgetError::command("unknown section 'savings'");
        assert_eq!(err.to_string(), "Invalid command: unknown section 'savings'");
        assert!(err.is_command());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: BudgetError = json_err.into();
        assert!(matches!(err, BudgetError::Json(_)));
    }
}
