//! Numeric values accepted by the spelling pipeline

use crate::error::{Result, SpellError};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Exclusive upper bound of spellable magnitudes (10^27)
pub const MAGNITUDE_LIMIT: u128 = 10u128.pow(27);

/// A decimal number kept digit for digit as it was written
///
/// Holds the sign, the whole part and the fractional digits verbatim, so no
/// fractional digit is ever lost before spelling decides how to round.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactDecimal {
    negative: bool,
    whole: u128,
    fraction: String,
}

impl ExactDecimal {
    /// Build from parts; `fraction` must consist of ASCII digits only
    pub fn new(negative: bool, whole: u128, fraction: &str) -> Result<Self> {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SpellError::InvalidType(format!(
                "'{fraction}' is not a run of fractional digits"
            )));
        }

        Ok(Self {
            negative,
            whole,
            fraction: fraction.to_string(),
        })
    }

    /// Whether the value is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Whether the value equals zero, whatever its sign
    pub fn is_zero(&self) -> bool {
        self.whole == 0 && self.is_integral()
    }

    /// Whether every fractional digit is zero
    pub fn is_integral(&self) -> bool {
        self.fits_places(0)
    }

    /// Whether no non-zero digit follows the first `places` fractional digits
    pub fn fits_places(&self, places: usize) -> bool {
        self.fraction
            .bytes()
            .skip(places)
            .all(|digit| digit == b'0')
    }

    /// Magnitude of the whole part
    pub fn whole(&self) -> u128 {
        self.whole
    }

    /// Fractional digits as written
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    /// First two fractional digits as a cent count (0..=99)
    pub fn cents(&self) -> u128 {
        self.fraction_digit(0) * 10 + self.fraction_digit(1)
    }

    /// Round to whole cents, half away from zero
    ///
    /// The result always carries exactly two fractional digits. A carry out
    /// of the cents moves into the whole part.
    pub fn round_cents(&self) -> Result<Self> {
        let mut whole = self.whole;
        let mut cents = self.cents();

        if self.fraction_digit(2) >= 5 {
            cents += 1;
            if cents == 100 {
                cents = 0;
                whole = whole
                    .checked_add(1)
                    .ok_or_else(|| SpellError::Overflow(self.to_string()))?;
            }
        }

        Ok(Self {
            negative: self.negative,
            whole,
            fraction: format!("{cents:02}"),
        })
    }

    fn fraction_digit(&self, index: usize) -> u128 {
        self.fraction
            .as_bytes()
            .get(index)
            .map_or(0, |digit| u128::from(digit - b'0'))
    }
}

impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.whole)?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

impl FromStr for ExactDecimal {
    type Err = SpellError;

    /// Parse plain decimal notation (`-12.345`, `+.5`, `007`); exponents are rejected
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let not_a_number = || SpellError::InvalidType(format!("'{trimmed}' is not a number"));

        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (whole_text, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |text: &str| text.bytes().all(|b| b.is_ascii_digit());
        if (whole_text.is_empty() && fraction.is_empty())
            || !all_digits(whole_text)
            || !all_digits(fraction)
            || (unsigned.contains('.') && fraction.is_empty())
        {
            return Err(not_a_number());
        }

        let whole = if whole_text.is_empty() {
            0
        } else {
            whole_text.parse::<u128>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow => SpellError::Overflow(trimmed.to_string()),
                _ => not_a_number(),
            })?
        };

        Self::new(negative, whole, fraction)
    }
}

impl From<Decimal> for ExactDecimal {
    fn from(value: Decimal) -> Self {
        let scale = value.scale();
        let mantissa = value.mantissa().unsigned_abs();
        let unit = 10u128.pow(scale);
        let fraction = if scale == 0 {
            String::new()
        } else {
            format!("{:0width$}", mantissa % unit, width = scale as usize)
        };

        Self {
            negative: value.is_sign_negative(),
            whole: mantissa / unit,
            fraction,
        }
    }
}

/// A number to be spelled
///
/// Integers are kept as `i128`; everything with a decimal point is held as an
/// [`ExactDecimal`] so that no digit goes through binary floating point or a
/// fixed-precision type before spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Numeral {
    /// Whole number
    Integer(i128),
    /// Number written with a decimal point
    Fixed(ExactDecimal),
}

impl Numeral {
    /// Whether the value is strictly below zero
    pub fn is_negative(&self) -> bool {
        match self {
            Numeral::Integer(value) => *value < 0,
            Numeral::Fixed(value) => value.is_negative(),
        }
    }

    /// Convert to a non-negative whole number
    ///
    /// Decimals are accepted when their fractional part is exactly zero.
    pub fn to_whole(&self) -> Result<u128> {
        if self.is_negative() {
            return Err(SpellError::InvalidValue(format!(
                "the number must be >= 0, got {self}"
            )));
        }

        match self {
            Numeral::Integer(value) => Ok(value.unsigned_abs()),
            Numeral::Fixed(value) if value.is_integral() => Ok(value.whole()),
            Numeral::Fixed(value) => Err(SpellError::InvalidValue(format!(
                "the number must be a whole number, got {value}"
            ))),
        }
    }

    /// Convert to a signed integer, rejecting values with a fractional part
    pub fn to_integer(&self) -> Result<i128> {
        match self {
            Numeral::Integer(value) => Ok(*value),
            Numeral::Fixed(value) if value.is_integral() => {
                let magnitude = i128::try_from(value.whole())
                    .map_err(|_| SpellError::Overflow(value.to_string()))?;
                Ok(if value.is_negative() {
                    -magnitude
                } else {
                    magnitude
                })
            }
            Numeral::Fixed(value) => Err(SpellError::InvalidType(format!(
                "expected an integer, got {value}"
            ))),
        }
    }

    /// Exact decimal form of the value
    pub fn to_exact(&self) -> ExactDecimal {
        match self {
            Numeral::Integer(value) => ExactDecimal {
                negative: *value < 0,
                whole: value.unsigned_abs(),
                fraction: String::new(),
            },
            Numeral::Fixed(value) => value.clone(),
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeral::Integer(value) => write!(f, "{value}"),
            Numeral::Fixed(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Numeral {
                fn from(value: $ty) -> Self {
                    Numeral::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<ExactDecimal> for Numeral {
    fn from(value: ExactDecimal) -> Self {
        Numeral::Fixed(value)
    }
}

impl From<Decimal> for Numeral {
    fn from(value: Decimal) -> Self {
        Numeral::Fixed(value.into())
    }
}

impl TryFrom<f64> for Numeral {
    type Error = SpellError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(SpellError::InvalidType(format!(
                "expected a finite number, got {value}"
            )));
        }
        if value.abs() >= MAGNITUDE_LIMIT as f64 {
            return Err(SpellError::Overflow(value.to_string()));
        }

        Decimal::from_f64(value)
            .map(Numeral::from)
            .ok_or_else(|| SpellError::InvalidType(format!("cannot represent {value} exactly")))
    }
}

impl FromStr for Numeral {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        match trimmed.parse::<i128>() {
            Ok(value) => return Ok(Numeral::Integer(value)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return Err(SpellError::Overflow(trimmed.to_string()));
            }
            Err(_) => {}
        }

        trimmed.parse::<ExactDecimal>().map(Numeral::Fixed)
    }
}

/// Split an amount into its signed integer part and signed fractional part
///
/// Both parts carry the sign of the whole amount, even when the integer part
/// is zero: `-0.95` splits into `(0, -0.95)`.
pub fn split_amount(amount: Decimal) -> (Decimal, Decimal) {
    (amount.trunc(), amount.fract())
}
