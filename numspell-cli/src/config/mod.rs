//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Input parsing configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Language configuration
    #[serde(default)]
    pub language: LanguageSettings,
}

/// Input parsing configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// Digit group separator
    pub separator: char,

    /// Decimal mark
    pub decimal: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            decimal: '.',
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Language-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LanguageSettings {
    /// Default language code
    pub default: String,

    /// Capitalize the first word of currency amounts
    pub capitalize_currency: bool,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            default: numspell_core::api::defaults::LANGUAGE.to_string(),
            capitalize_currency: numspell_core::api::defaults::CAPITALIZE_CURRENCY,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {e}", path.display())).into()
        })
    }

    /// Load a configuration file if one was given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
