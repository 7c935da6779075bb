//! Speller bound to one language

use crate::api::Config;
use crate::domain::numeral::Numeral;
use crate::domain::speller::{currency_text, integer_text, render, CurrencySpelling};
use crate::error::Result;
use crate::language::{get_language_config, LanguageConfig, Lexicon};
use std::path::Path;

/// Spells integers and currency amounts with one set of word tables
///
/// A `Speller` holds no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Speller {
    code: String,
    name: String,
    lexicon: Lexicon,
    capitalize_currency: bool,
}

impl Speller {
    /// Create an English speller from the built-in tables
    pub fn new() -> Self {
        Self {
            code: "en".to_string(),
            name: "English".to_string(),
            lexicon: Lexicon::english(),
            capitalize_currency: true,
        }
    }

    /// Create a speller with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let mut speller = match &config.language_file {
            Some(path) => Self::from_file(path)?,
            None => Self::with_language(&config.language)?,
        };
        speller.capitalize_currency = config.capitalize_currency;

        Ok(speller)
    }

    /// Create a speller for an embedded language ("en", "english")
    pub fn with_language(code: &str) -> Result<Self> {
        Self::from_language_config(get_language_config(code)?)
    }

    /// Create a speller from a parsed configuration
    pub fn from_language_config(config: &LanguageConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            lexicon: config.lexicon()?,
            capitalize_currency: true,
        })
    }

    /// Create a speller from an external TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_language_config(&LanguageConfig::from_file(path)?)
    }

    /// Spell a signed integer; zero yields an empty string
    pub fn spell_integer(&self, value: impl Into<Numeral>) -> Result<String> {
        integer_text(
            value.into(),
            &self.lexicon.scales,
            &self.lexicon.digits,
            &self.lexicon.grammar,
        )
    }

    /// Spell a currency amount; zero yields an empty string
    pub fn spell_currency(&self, amount: impl Into<Numeral>) -> Result<String> {
        self.spell_currency_detailed(amount)
            .map(|spelling| spelling.text)
    }

    /// Spell a currency amount and report rounding
    pub fn spell_currency_detailed(&self, amount: impl Into<Numeral>) -> Result<CurrencySpelling> {
        currency_text(
            amount.into(),
            &self.lexicon.scales,
            &self.lexicon.digits,
            &self.lexicon.grammar,
            &self.lexicon.currency,
            self.capitalize_currency,
        )
    }

    /// Text a front end shows for zero ("Zero" or "Zero dollars")
    pub fn zero_phrase(&self, currency: bool) -> String {
        let mut words = vec![self.lexicon.grammar.zero.clone()];
        if currency {
            words.push(self.lexicon.currency.major_plural.clone());
        }
        render(&words, true)
    }

    /// Word tables in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Language code
    pub fn language_code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn language_name(&self) -> &str {
        &self.name
    }
}

impl Default for Speller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpellError;
    use rust_decimal::Decimal;

    #[test]
    fn test_default_speller_is_english() {
        let speller = Speller::default();
        assert_eq!(speller.language_code(), "en");
        assert_eq!(speller.language_name(), "English");
        assert_eq!(speller.spell_integer(14).unwrap(), "Fourteen");
    }

    #[test]
    fn test_embedded_and_builtin_agree() {
        let embedded = Speller::with_language("en").unwrap();
        let builtin = Speller::new();
        assert_eq!(embedded.lexicon(), builtin.lexicon());
    }

    #[test]
    fn test_unknown_language() {
        assert!(matches!(
            Speller::with_language("xx"),
            Err(SpellError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_capitalization_from_config() {
        let config = Config::builder().capitalize_currency(false).build().unwrap();
        let speller = Speller::with_config(config).unwrap();
        assert_eq!(
            speller.spell_currency(Decimal::new(101, 2)).unwrap(),
            "one dollar and one cent"
        );
        // integers are always capitalized
        assert_eq!(speller.spell_integer(3).unwrap(), "Three");
    }

    #[test]
    fn test_zero_phrase() {
        let speller = Speller::new();
        assert_eq!(speller.zero_phrase(false), "Zero");
        assert_eq!(speller.zero_phrase(true), "Zero dollars");
    }

    #[test]
    fn test_speller_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Speller>();
    }
}
