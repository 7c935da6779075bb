//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One input value and the outcome of spelling it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpelledValue {
    /// The value as typed
    pub input: String,
    /// Whether the value was spelled as a currency amount
    pub currency: bool,
    /// Spelled words, absent when spelling failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Amount actually spelled when the input had more than two fractional digits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounded_to: Option<String>,
    /// Failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SpelledValue {
    /// A successfully spelled value
    pub fn spelled(input: &str, currency: bool, text: String) -> Self {
        Self {
            input: input.to_string(),
            currency,
            text: Some(text),
            rounded_to: None,
            error: None,
        }
    }

    /// A value that could not be spelled
    pub fn failed(input: &str, currency: bool, error: impl ToString) -> Self {
        Self {
            input: input.to_string(),
            currency,
            text: None,
            rounded_to: None,
            error: Some(error.to_string()),
        }
    }

    /// Whether spelling failed
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single value
    fn format_value(&mut self, value: &SpelledValue) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
