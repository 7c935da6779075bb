//! Spell integers and currency amounts as English words
//!
//! The crate breaks a number into digit groups, spells each three-digit group
//! with the hundreds/tens/ones grammar and attaches scale words ("thousand",
//! "million", ...). Currency amounts add dollar and cent units and spell the
//! cents with the same machinery.
//!
//! # Architecture
//!
//! - **Domain layer**: decomposition, assembly and the spelling grammar
//! - **Language layer**: word tables and their TOML configuration
//! - **API layer**: [`Speller`], a speller bound to one language
//!
//! # Example
//!
//! ```rust
//! use numspell_core::Speller;
//! use rust_decimal::Decimal;
//!
//! let speller = Speller::new();
//!
//! assert_eq!(
//!     speller.spell_integer(145_214).unwrap(),
//!     "One hundred forty-five thousand two hundred fourteen"
//! );
//! assert_eq!(
//!     speller.spell_currency(Decimal::new(-1234, 1)).unwrap(),
//!     "Minus one hundred twenty-three dollars and forty cents"
//! );
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod language;

pub use api::{Config, ConfigBuilder, Speller};
pub use domain::*;
pub use error::{Result, RoundingNotice, SpellError};
pub use language::{
    CurrencyUnits, DigitNames, Grammar, LanguageConfig, Lexicon, ScaleWords,
};

// Re-export so callers can build amounts without a direct dependency
pub use rust_decimal::Decimal;
