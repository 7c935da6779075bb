//! Language tables and their TOML configuration

pub mod config;
pub mod loader;
pub mod tables;

pub use config::{LanguageConfig, Metadata};
pub use loader::{embedded_source, get_language_config, list_available_languages};
pub use tables::{CurrencyUnits, DigitNames, Grammar, Lexicon, ScaleWords};
