//! Parsing of user-typed amounts
//!
//! Accepts numbers written with a custom group separator and decimal mark,
//! such as `1.234.567,89$` or `$1,234,567.89`. A `$` anywhere in the text
//! marks the value as a currency amount; everything else is a plain integer.

use crate::error::CliError;
use numspell_core::{ExactDecimal, Numeral};
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

/// Characters accepted as group separator or decimal mark
pub const AVAILABLE_SEPARATORS: [char; 9] = [',', '.', '-', '–', '_', '&', '/', ':', '|'];

/// Marks a value as a currency amount
pub const CURRENCY_SIGN: char = '$';

/// Largest number of whole digits a spellable amount can have
const MAX_WHOLE_DIGITS: usize = 27;

static NUMBER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn number_pattern() -> &'static Regex {
    NUMBER_PATTERN.get_or_init(|| {
        Regex::new(r"^(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)$").expect("number pattern is valid")
    })
}

/// Group separator and decimal mark used while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    group: char,
    decimal: char,
}

impl Separators {
    /// Create a separator pair; both must be available and distinct
    pub fn new(group: char, decimal: char) -> Result<Self, CliError> {
        for (role, ch) in [("group", group), ("decimal", decimal)] {
            if !AVAILABLE_SEPARATORS.contains(&ch) {
                return Err(CliError::InvalidSeparator(format!(
                    "'{ch}' is not an available {role} separator, choose one of: {}",
                    available_list()
                )));
            }
        }

        if group == decimal {
            return Err(CliError::InvalidSeparator(format!(
                "group separator and decimal mark must differ, both are '{group}'"
            )));
        }

        Ok(Self { group, decimal })
    }

    /// Group separator
    pub fn group(&self) -> char {
        self.group
    }

    /// Decimal mark
    pub fn decimal(&self) -> char {
        self.decimal
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            group: ',',
            decimal: '.',
        }
    }
}

/// Space-separated list of the available separators
pub fn available_list() -> String {
    AVAILABLE_SEPARATORS
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A value ready for spelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedValue {
    /// Plain number, spelled as an integer
    Integer(Numeral),
    /// `$` amount, spelled in dollars and cents
    Currency(ExactDecimal),
}

/// Parse raw user text into a number
pub fn parse_value(raw: &str, separators: &Separators) -> Result<ParsedValue, CliError> {
    let invalid = || CliError::InvalidInput(format!("'{raw}' is not a number"));

    let trimmed = raw.trim();
    let currency = trimmed.contains(CURRENCY_SIGN);
    let text: String = trimmed.chars().filter(|ch| *ch != CURRENCY_SIGN).collect();

    let (sign, body) = match text.chars().next() {
        Some(ch @ ('-' | '+')) => (ch, &text[ch.len_utf8()..]),
        _ => ('+', text.as_str()),
    };

    if body.matches(separators.decimal).count() > 1 {
        return Err(CliError::InvalidInput(format!(
            "'{raw}' contains the decimal mark '{}' more than once",
            separators.decimal
        )));
    }

    let digits: String = body
        .chars()
        .filter(|ch| *ch != separators.group && !(*ch == '_' && separators.decimal != '_'))
        .map(|ch| if ch == separators.decimal { '.' } else { ch })
        .collect();

    if !number_pattern().is_match(&digits) {
        return Err(invalid());
    }

    let whole_digits = digits.split('.').next().unwrap_or("").trim_start_matches('0');
    if whole_digits.len() > MAX_WHOLE_DIGITS {
        return Err(CliError::InvalidInput(format!(
            "'{raw}' is too large, at most {MAX_WHOLE_DIGITS} whole digits are spelled"
        )));
    }

    let unsigned = if digits.starts_with('.') {
        format!("0{digits}")
    } else {
        digits
    };
    let normalized = if sign == '-' {
        format!("-{unsigned}")
    } else {
        unsigned
    };
    if currency {
        ExactDecimal::from_str(&normalized)
            .map(ParsedValue::Currency)
            .map_err(|_| invalid())
    } else {
        Numeral::from_str(&normalized)
            .map(ParsedValue::Integer)
            .map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(text: &str) -> ExactDecimal {
        text.parse().unwrap()
    }

    fn currency(raw: &str) -> ExactDecimal {
        match parse_value(raw, &Separators::default()).unwrap() {
            ParsedValue::Currency(amount) => amount,
            other => panic!("expected a currency amount, got {other:?}"),
        }
    }

    #[test]
    fn test_underscores() {
        assert_eq!(currency("1_2_3_4$"), exact("1234"));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(currency("0001234$"), exact("1234"));
    }

    #[test]
    fn test_sign_and_currency_position() {
        assert_eq!(currency("-$12.50"), exact("-12.50"));
        assert_eq!(currency("$-12.50"), exact("-12.50"));
        assert_eq!(currency("$1,234,567.89"), exact("1234567.89"));
        assert_eq!(currency("$.5"), exact("0.5"));
    }

    #[test]
    fn test_custom_separators() {
        let separators = Separators::new('.', ',').unwrap();
        assert_eq!(
            parse_value("2.013.777,34$", &separators).unwrap(),
            ParsedValue::Currency(exact("2013777.34"))
        );
        // the group separator is not strictly placed
        assert_eq!(
            parse_value("..$...1....4", &separators).unwrap(),
            ParsedValue::Currency(exact("14"))
        );
    }

    #[test]
    fn test_decimal_mark_is_strict() {
        let separators = Separators::new('.', ',').unwrap();
        assert!(matches!(
            parse_value("1,2,3$", &separators),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_plain_values_are_integers() {
        assert_eq!(
            parse_value("1,000,001", &Separators::default()).unwrap(),
            ParsedValue::Integer(Numeral::Integer(1_000_001))
        );
        assert_eq!(
            parse_value("-14", &Separators::default()).unwrap(),
            ParsedValue::Integer(Numeral::Integer(-14))
        );
        assert!(matches!(
            parse_value("5501", &Separators::default()).unwrap(),
            ParsedValue::Integer(_)
        ));
    }

    #[test]
    fn test_bad_input() {
        let bad_inputs = [
            "a123b$",
            "abc$",
            "1-1235-123&$",
            "-bscb$",
            "1e5.120$",
            "$Minus two",
            "550$/",
            "$\u{e5}22350",
            r"\34522350$",
            "/12345$",
            "-",
            "",
            "$",
            "√asdg",
        ];

        for input in bad_inputs {
            assert!(
                matches!(
                    parse_value(input, &Separators::default()),
                    Err(CliError::InvalidInput(_))
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_fractional_digits_are_kept() {
        let value = parse_value("1.00000000000000000000000000001", &Separators::default()).unwrap();
        match value {
            ParsedValue::Integer(numeral) => assert!(numeral.to_integer().is_err()),
            other => panic!("expected an integer value, got {other:?}"),
        }

        let amount = currency("$800,000,000,000,000,000,000,000,000.01");
        assert_eq!(amount.whole(), 8 * 10u128.pow(26));
        assert_eq!(amount.fraction_digits(), "01");

        let tiny = currency(&format!("$0.{}1", "0".repeat(30)));
        assert_eq!(tiny.fraction_digits().len(), 31);
    }

    #[test]
    fn test_too_many_digits() {
        let raw = format!("${}", "9".repeat(28));
        let err = parse_value(&raw, &Separators::default()).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_separator_validation() {
        assert!(Separators::new('|', ':').is_ok());
        assert!(matches!(
            Separators::new('x', '.'),
            Err(CliError::InvalidSeparator(_))
        ));
        assert!(matches!(
            Separators::new('.', '.'),
            Err(CliError::InvalidSeparator(_))
        ));
    }

    #[test]
    fn test_available_list() {
        assert_eq!(available_list(), ", . - – _ & / : |");
    }
}
