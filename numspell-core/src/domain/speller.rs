//! Whole-number and currency spelling
//!
//! Both entry points share [`spell_magnitude`], which walks the thousands
//! groups of a magnitude and attaches scale words. Currency cents go through
//! the same helper with the trailing scale word switched off.

use super::chunk::{chunk_words, push_word};
use super::magnitude::MagnitudeMap;
use super::numeral::{ExactDecimal, Numeral, MAGNITUDE_LIMIT};
use crate::error::{Result, RoundingNotice, SpellError};
use crate::language::tables::{CurrencyUnits, DigitNames, Grammar, ScaleWords};

/// Fractional digits kept for currency amounts
pub const CENT_DIGITS: usize = 2;

const THOUSANDS_STEP: usize = 3;

/// Switches for [`spell_magnitude`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellOptions {
    /// Emit the scale word of the least significant non-zero group
    pub trailing_scale: bool,
}

impl Default for SpellOptions {
    fn default() -> Self {
        Self {
            trailing_scale: true,
        }
    }
}

/// Result of spelling a currency amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySpelling {
    /// Finished text
    pub text: String,
    /// Set when the amount had more than two fractional digits
    pub rounding: Option<RoundingNotice>,
}

/// Spell a magnitude below 10^27 as word tokens, without sign or units
pub fn spell_magnitude(
    value: u128,
    scales: &ScaleWords,
    digits: &DigitNames,
    options: SpellOptions,
) -> Result<Vec<String>> {
    magnitude_words(value, scales, digits, "-", options)
}

pub(crate) fn magnitude_words(
    value: u128,
    scales: &ScaleWords,
    digits: &DigitNames,
    hyphen: &str,
    options: SpellOptions,
) -> Result<Vec<String>> {
    if value >= MAGNITUDE_LIMIT {
        return Err(SpellError::Overflow(value.to_string()));
    }

    let groups = MagnitudeMap::from_whole(value, THOUSANDS_STEP)?;
    let last_exponent = groups.last().map(|entry| entry.exponent);
    let mut words = Vec::new();

    for entry in groups.iter().filter(|entry| entry.value != 0) {
        words.extend(chunk_words(entry.value, scales, digits, hyphen)?);

        if options.trailing_scale || Some(entry.exponent) != last_exponent {
            push_word(&mut words, scales.word(entry.exponent));
        }
    }

    Ok(words)
}

/// Join word tokens with single spaces, upper-casing only the first character
pub fn render(words: &[String], capitalize: bool) -> String {
    let text = words.join(" ");
    let text = text.trim();

    if !capitalize {
        return text.to_string();
    }

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Spell a signed integer with `|value| < 10^27`
///
/// Zero spells as the empty string; front ends decide how to present it.
///
/// ```
/// use numspell_core::{spell_integer, DigitNames, ScaleWords};
///
/// let text = spell_integer(-123_123, &ScaleWords::english(), &DigitNames::english()).unwrap();
/// assert_eq!(text, "Minus one hundred twenty-three thousand one hundred twenty-three");
/// ```
pub fn spell_integer(
    value: impl Into<Numeral>,
    scales: &ScaleWords,
    digits: &DigitNames,
) -> Result<String> {
    integer_text(value.into(), scales, digits, &Grammar::default())
}

pub(crate) fn integer_text(
    numeral: Numeral,
    scales: &ScaleWords,
    digits: &DigitNames,
    grammar: &Grammar,
) -> Result<String> {
    let value = numeral.to_integer()?;
    let magnitude = value.unsigned_abs();
    if magnitude >= MAGNITUDE_LIMIT {
        return Err(SpellError::Overflow(value.to_string()));
    }

    let mut words = Vec::new();
    if value < 0 {
        push_word(&mut words, &grammar.negative);
    }
    words.extend(magnitude_words(
        magnitude,
        scales,
        digits,
        &grammar.hyphen,
        SpellOptions::default(),
    )?);

    Ok(render(&words, true))
}

/// Spell a currency amount in dollars and cents
///
/// ```
/// use numspell_core::{spell_currency, DigitNames, ScaleWords};
/// use rust_decimal::Decimal;
///
/// let text = spell_currency(
///     Decimal::new(12301, 2),
///     &ScaleWords::english(),
///     &DigitNames::english(),
///     true,
/// )
/// .unwrap();
/// assert_eq!(text, "One hundred twenty-three dollars and one cent");
/// ```
pub fn spell_currency(
    amount: impl Into<Numeral>,
    scales: &ScaleWords,
    digits: &DigitNames,
    capitalize: bool,
) -> Result<String> {
    spell_currency_detailed(amount, scales, digits, capitalize).map(|spelling| spelling.text)
}

/// Like [`spell_currency`], also reporting whether the amount was rounded
pub fn spell_currency_detailed(
    amount: impl Into<Numeral>,
    scales: &ScaleWords,
    digits: &DigitNames,
    capitalize: bool,
) -> Result<CurrencySpelling> {
    currency_text(
        amount.into(),
        scales,
        digits,
        &Grammar::default(),
        &CurrencyUnits::default(),
        capitalize,
    )
}

pub(crate) fn currency_text(
    numeral: Numeral,
    scales: &ScaleWords,
    digits: &DigitNames,
    grammar: &Grammar,
    units: &CurrencyUnits,
    capitalize: bool,
) -> Result<CurrencySpelling> {
    let amount = numeral.to_exact();
    ensure_in_range(&amount)?;

    // Rounding before taking the cents lets .999 carry into the whole part
    let rounded = amount.round_cents()?;
    ensure_in_range(&rounded)?;

    let rounding = (!amount.fits_places(CENT_DIGITS)).then(|| RoundingNotice {
        original: amount.clone(),
        rounded: rounded.clone(),
    });

    let whole = rounded.whole();
    let cents = rounded.cents();

    let mut words = Vec::new();
    if rounded.is_negative() {
        push_word(&mut words, &grammar.negative);
    }

    words.extend(magnitude_words(
        whole,
        scales,
        digits,
        &grammar.hyphen,
        SpellOptions::default(),
    )?);
    push_word(&mut words, units.major(whole));

    if cents != 0 {
        if whole != 0 {
            push_word(&mut words, &grammar.connector);
        }
        words.extend(magnitude_words(
            cents,
            scales,
            digits,
            &grammar.hyphen,
            SpellOptions {
                trailing_scale: false,
            },
        )?);
        push_word(&mut words, units.minor(cents));
    }

    Ok(CurrencySpelling {
        text: render(&words, capitalize),
        rounding,
    })
}

fn ensure_in_range(amount: &ExactDecimal) -> Result<()> {
    if amount.whole() < MAGNITUDE_LIMIT {
        Ok(())
    } else {
        Err(SpellError::Overflow(amount.to_string()))
    }
}
