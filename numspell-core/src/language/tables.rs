//! Word tables used by the spelling pipeline
//!
//! Tables are immutable values passed into every call. Lookups of entries a
//! table does not define resolve to the empty string, which the speller drops.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ENGLISH_SCALES: [(u32, &str); 9] = [
    (2, "hundred"),
    (3, "thousand"),
    (6, "million"),
    (9, "billion"),
    (12, "trillion"),
    (15, "quadrillion"),
    (18, "quintillion"),
    (21, "sextillion"),
    (24, "septillion"),
];

const ENGLISH_DIGITS: [(u32, &str); 27] = [
    (1, "one"),
    (2, "two"),
    (3, "three"),
    (4, "four"),
    (5, "five"),
    (6, "six"),
    (7, "seven"),
    (8, "eight"),
    (9, "nine"),
    (10, "ten"),
    (11, "eleven"),
    (12, "twelve"),
    (13, "thirteen"),
    (14, "fourteen"),
    (15, "fifteen"),
    (16, "sixteen"),
    (17, "seventeen"),
    (18, "eighteen"),
    (19, "nineteen"),
    (20, "twenty"),
    (30, "thirty"),
    (40, "forty"),
    (50, "fifty"),
    (60, "sixty"),
    (70, "seventy"),
    (80, "eighty"),
    (90, "ninety"),
];

/// Exponents a scale table must define
pub const REQUIRED_SCALE_EXPONENTS: [u32; 9] = [2, 3, 6, 9, 12, 15, 18, 21, 24];

/// Values a digit-name table must define
pub const REQUIRED_DIGIT_VALUES: [u32; 27] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 30, 40, 50, 60, 70,
    80, 90,
];

/// Exponent → scale word ("hundred", "thousand", ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleWords {
    words: BTreeMap<u32, String>,
}

impl ScaleWords {
    /// Build a table from `(exponent, word)` pairs
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    /// Short-scale English words up to septillion
    pub fn english() -> Self {
        Self::new(ENGLISH_SCALES)
    }

    /// Scale word for `exponent`, empty when the table has none
    pub fn word(&self, exponent: u32) -> &str {
        self.words.get(&exponent).map(String::as_str).unwrap_or("")
    }

    /// Whether the table defines a word for `exponent`
    pub fn contains(&self, exponent: u32) -> bool {
        self.words.contains_key(&exponent)
    }

    /// Iterate `(exponent, word)` pairs in ascending exponent order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.words.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl Default for ScaleWords {
    fn default() -> Self {
        Self::english()
    }
}

/// Value → digit name ("one", ..., "twenty", "thirty", ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitNames {
    names: BTreeMap<u32, String>,
}

impl DigitNames {
    /// Build a table from `(value, name)` pairs
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    /// English names for 1..=20 and the round tens
    pub fn english() -> Self {
        Self::new(ENGLISH_DIGITS)
    }

    /// Name for `value`, empty when the table has none (0, 21, ...)
    pub fn name(&self, value: u128) -> &str {
        u32::try_from(value)
            .ok()
            .and_then(|value| self.names.get(&value))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Whether the table defines a name for `value`
    pub fn contains(&self, value: u32) -> bool {
        self.names.contains_key(&value)
    }

    /// Iterate `(value, name)` pairs in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.names.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl Default for DigitNames {
    fn default() -> Self {
        Self::english()
    }
}

/// Function words used around the numeric words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    /// Word placed in front of negative values
    #[serde(default = "default_negative")]
    pub negative: String,
    /// Word joining the major and minor currency parts
    #[serde(default = "default_connector")]
    pub connector: String,
    /// Joins a tens word with a ones word ("twenty-three")
    #[serde(default = "default_hyphen")]
    pub hyphen: String,
    /// Word for zero, used by front ends
    #[serde(default = "default_zero")]
    pub zero: String,
}

fn default_negative() -> String {
    "minus".to_string()
}

fn default_connector() -> String {
    "and".to_string()
}

fn default_hyphen() -> String {
    "-".to_string()
}

fn default_zero() -> String {
    "zero".to_string()
}

impl Default for Grammar {
    fn default() -> Self {
        Self {
            negative: default_negative(),
            connector: default_connector(),
            hyphen: default_hyphen(),
            zero: default_zero(),
        }
    }
}

/// Major and minor currency unit words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyUnits {
    pub major_singular: String,
    pub major_plural: String,
    pub minor_singular: String,
    pub minor_plural: String,
}

impl CurrencyUnits {
    /// Unit word for a major amount; empty for zero
    pub fn major(&self, amount: u128) -> &str {
        match amount {
            0 => "",
            1 => &self.major_singular,
            _ => &self.major_plural,
        }
    }

    /// Unit word for a minor amount
    pub fn minor(&self, amount: u128) -> &str {
        if amount == 1 {
            &self.minor_singular
        } else {
            &self.minor_plural
        }
    }
}

impl Default for CurrencyUnits {
    fn default() -> Self {
        Self {
            major_singular: "dollar".to_string(),
            major_plural: "dollars".to_string(),
            minor_singular: "cent".to_string(),
            minor_plural: "cents".to_string(),
        }
    }
}

/// Every table a speller needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    pub scales: ScaleWords,
    pub digits: DigitNames,
    pub grammar: Grammar,
    pub currency: CurrencyUnits,
}

impl Lexicon {
    /// English tables with dollars and cents
    pub fn english() -> Self {
        Self::default()
    }
}
