//! Language source management for CLI

use numspell_core::{Config, Speller};
use std::path::PathBuf;

/// Source of word tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Embedded language selected by code or name
    BuiltIn(String),
    /// External configuration file
    External(PathBuf),
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(code) => format!("Built-in: {code}"),
            LanguageSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Build a speller for this source
    pub fn speller(&self, capitalize_currency: bool) -> numspell_core::Result<Speller> {
        let builder = Config::builder().capitalize_currency(capitalize_currency);
        let config = match self {
            LanguageSource::BuiltIn(code) => builder.language(code.as_str()).build()?,
            LanguageSource::External(path) => builder.language_file(path.clone()).build()?,
        };

        Speller::with_config(config)
    }
}
