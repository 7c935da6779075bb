//! Error types for spelling operations

use crate::domain::numeral::ExactDecimal;
use thiserror::Error;

/// Errors raised by the decomposition and spelling pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellError {
    /// Input is not a number, or not of the expected shape
    #[error("Invalid type: {0}")]
    InvalidType(String),

    /// Numeric input violates a precondition
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Magnitude is outside of the spellable range
    #[error("Overflow: |{0}| must be less than 10^27")]
    Overflow(String),

    /// Language configuration loading or validation error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown language code
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Result type for spelling operations
pub type Result<T> = std::result::Result<T, SpellError>;

/// Informational notice emitted when a currency amount carried more than two
/// fractional digits and had to be rounded.
///
/// This is not an error: spelling continues with `rounded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundingNotice {
    /// Amount as it was passed in
    pub original: ExactDecimal,
    /// Amount that was actually spelled
    pub rounded: ExactDecimal,
}

impl std::fmt::Display for RoundingNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "amount {} rounded to {} (at most two fractional digits are spelled)",
            self.original, self.rounded
        )
    }
}
