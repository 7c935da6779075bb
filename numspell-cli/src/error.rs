//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Separator character not allowed, or clashing with the decimal mark
    InvalidSeparator(String),
    /// Value text could not be parsed into a number
    InvalidInput(String),
    /// Spelling error from core
    SpellingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidSeparator(msg) => write!(f, "Invalid separator: {msg}"),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            CliError::SpellingError(msg) => write!(f, "Spelling error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<numspell_core::SpellError> for CliError {
    fn from(err: numspell_core::SpellError) -> Self {
        CliError::SpellingError(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
