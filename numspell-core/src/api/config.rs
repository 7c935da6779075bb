//! Configuration API for spellers

use crate::error::{Result, SpellError};
use std::path::PathBuf;

/// Default configuration constants
pub mod defaults {
    /// Language used when none is given
    pub const LANGUAGE: &str = "en";

    /// Whether currency text starts with a capital letter
    pub const CAPITALIZE_CURRENCY: bool = true;
}

/// Speller configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) language: String,
    pub(crate) language_file: Option<PathBuf>,
    pub(crate) capitalize_currency: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: defaults::LANGUAGE.to_string(),
            language_file: None,
            capitalize_currency: defaults::CAPITALIZE_CURRENCY,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Language code of an embedded configuration
    pub fn language(&self) -> &str {
        &self.language
    }

    /// External language file, which takes precedence over the code
    pub fn language_file(&self) -> Option<&PathBuf> {
        self.language_file.as_ref()
    }

    /// Whether currency text is capitalized
    pub fn capitalize_currency(&self) -> bool {
        self.capitalize_currency
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.language_file.is_none() && self.language.trim().is_empty() {
            return Err(SpellError::Configuration(
                "language must not be empty".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    language_file: Option<PathBuf>,
    capitalize_currency: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Load the language from a TOML file instead of the embedded set
    pub fn language_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.language_file = Some(path.into());
        self
    }

    /// Capitalize the first letter of currency text
    pub fn capitalize_currency(mut self, capitalize: bool) -> Self {
        self.capitalize_currency = Some(capitalize);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(code) = self.language {
            config.language = code;
        }

        if self.language_file.is_some() {
            config.language_file = self.language_file;
        }

        if let Some(capitalize) = self.capitalize_currency {
            config.capitalize_currency = capitalize;
        }

        config.validate()?;
        Ok(config)
    }
}
