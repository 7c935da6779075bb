//! Configuration structures and validation
//!
//! This module defines the TOML schema for language configuration.

use super::tables::{
    CurrencyUnits, DigitNames, Grammar, Lexicon, ScaleWords, REQUIRED_DIGIT_VALUES,
    REQUIRED_SCALE_EXPONENTS,
};
use crate::error::{Result, SpellError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    /// Scale words keyed by exponent ("3" = "thousand")
    pub scales: BTreeMap<String, String>,
    /// Digit names keyed by value ("30" = "thirty")
    pub digits: BTreeMap<String, String>,
    #[serde(default)]
    pub grammar: Grammar,
    #[serde(default)]
    pub currency: CurrencyUnits,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

impl LanguageConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(content)
            .map_err(|e| SpellError::Configuration(format!("Failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SpellError::Configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(SpellError::Configuration(
                "Language code must not be empty".to_string(),
            ));
        }

        let scales = self.scale_words()?;
        if let Some(missing) = REQUIRED_SCALE_EXPONENTS
            .iter()
            .find(|exponent| !scales.contains(**exponent))
        {
            return Err(SpellError::Configuration(format!(
                "Missing scale word for exponent {missing}"
            )));
        }

        let digits = self.digit_names()?;
        if let Some(missing) = REQUIRED_DIGIT_VALUES
            .iter()
            .find(|value| !digits.contains(**value))
        {
            return Err(SpellError::Configuration(format!(
                "Missing digit name for {missing}"
            )));
        }

        let required_words = [
            ("grammar.negative", &self.grammar.negative),
            ("grammar.connector", &self.grammar.connector),
            ("grammar.zero", &self.grammar.zero),
            ("currency.major_singular", &self.currency.major_singular),
            ("currency.major_plural", &self.currency.major_plural),
            ("currency.minor_singular", &self.currency.minor_singular),
            ("currency.minor_plural", &self.currency.minor_plural),
        ];
        for (field, word) in required_words {
            if word.trim().is_empty() {
                return Err(SpellError::Configuration(format!("{field} must not be empty")));
            }
        }

        Ok(())
    }

    /// Scale-word table with numeric keys
    pub fn scale_words(&self) -> Result<ScaleWords> {
        parse_table(&self.scales, "scale exponent").map(ScaleWords::new)
    }

    /// Digit-name table with numeric keys
    pub fn digit_names(&self) -> Result<DigitNames> {
        parse_table(&self.digits, "digit value").map(DigitNames::new)
    }

    /// All tables needed for spelling
    pub fn lexicon(&self) -> Result<Lexicon> {
        Ok(Lexicon {
            scales: self.scale_words()?,
            digits: self.digit_names()?,
            grammar: self.grammar.clone(),
            currency: self.currency.clone(),
        })
    }
}

fn parse_table(table: &BTreeMap<String, String>, what: &str) -> Result<Vec<(u32, String)>> {
    table
        .iter()
        .map(|(key, word)| {
            let key = key.trim().parse::<u32>().map_err(|_| {
                SpellError::InvalidType(format!("{what} '{key}' is not an unsigned integer"))
            })?;
            if word.trim().is_empty() {
                return Err(SpellError::Configuration(format!(
                    "Empty word for {what} {key}"
                )));
            }
            Ok((key, word.clone()))
        })
        .collect()
}
