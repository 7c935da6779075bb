//! Spelling of a single three-digit group

use super::magnitude::{assemble, MagnitudeMap};
use crate::error::{Result, SpellError};
use crate::language::tables::{DigitNames, ScaleWords};

/// Largest value a chunk can hold
pub const CHUNK_MAX: u128 = 999;

const HUNDREDS_EXPONENT: u32 = 2;
const ONES_EXPONENT: u32 = 0;

/// Spell a value in `0..=999` as a list of word tokens
///
/// Compound tens are hyphenated into a single token ("forty-five"). Zero
/// yields no tokens.
///
/// ```
/// use numspell_core::{spell_chunk, DigitNames, ScaleWords};
///
/// let words = spell_chunk(145, &ScaleWords::english(), &DigitNames::english()).unwrap();
/// assert_eq!(words, vec!["one", "hundred", "forty-five"]);
/// ```
pub fn spell_chunk(value: u128, scales: &ScaleWords, digits: &DigitNames) -> Result<Vec<String>> {
    chunk_words(value, scales, digits, "-")
}

pub(crate) fn chunk_words(
    value: u128,
    scales: &ScaleWords,
    digits: &DigitNames,
    hyphen: &str,
) -> Result<Vec<String>> {
    if value > CHUNK_MAX {
        return Err(SpellError::InvalidValue(format!(
            "a chunk must be within 0..={CHUNK_MAX}, got {value}"
        )));
    }

    let mut places = MagnitudeMap::from_whole(value, 1)?;
    let mut words = Vec::with_capacity(4);

    if let Some(hundreds) = places.remove(HUNDREDS_EXPONENT) {
        push_word(&mut words, digits.name(hundreds));
        push_word(&mut words, scales.word(HUNDREDS_EXPONENT));
    }

    let rest = if places.is_empty() {
        0
    } else {
        assemble(&places)?
    };

    match rest {
        0 => {}
        1..=20 => push_word(&mut words, digits.name(rest)),
        _ => {
            let ones = places.get(ONES_EXPONENT).unwrap_or(0);
            let tens = digits.name(rest - ones);
            let ones = digits.name(ones);

            if ones.is_empty() || tens.is_empty() {
                push_word(&mut words, tens);
                push_word(&mut words, ones);
            } else {
                words.push(format!("{tens}{hyphen}{ones}"));
            }
        }
    }

    Ok(words)
}

pub(super) fn push_word(words: &mut Vec<String>, word: &str) {
    if !word.is_empty() {
        words.push(word.to_string());
    }
}
