//! Digit-group decomposition and its inverse
//!
//! A number is broken into fixed-width groups of decimal digits, each keyed by
//! the power of ten its least significant digit sits at. With a step of 3 this
//! yields the thousands groups used for scale words; with a step of 1 it yields
//! the hundreds/tens/ones digits of a single group.

use super::numeral::Numeral;
use crate::error::{Result, SpellError};
use smallvec::SmallVec;

/// One digit group: `value × 10^exponent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MagnitudeEntry {
    /// Power of ten
    pub exponent: u32,
    /// Value of the digit group at that power
    pub value: u128,
}

impl MagnitudeEntry {
    /// Create a new entry
    pub fn new(exponent: u32, value: u128) -> Self {
        Self { exponent, value }
    }
}

impl From<(u32, u128)> for MagnitudeEntry {
    fn from((exponent, value): (u32, u128)) -> Self {
        Self::new(exponent, value)
    }
}

/// Ordered digit groups, strictly descending by exponent
///
/// Nine inline slots cover a full thousands decomposition below 10^27.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MagnitudeMap {
    entries: SmallVec<[MagnitudeEntry; 9]>,
}

impl MagnitudeMap {
    /// Build a map from arbitrary pairs
    ///
    /// Pairs must be strictly descending by exponent.
    pub fn from_pairs<I, P>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<MagnitudeEntry>,
    {
        let mut entries: SmallVec<[MagnitudeEntry; 9]> = SmallVec::new();

        for entry in pairs.into_iter().map(Into::into) {
            if let Some(last) = entries.last() {
                if entry.exponent >= last.exponent {
                    return Err(SpellError::InvalidValue(format!(
                        "exponents must be strictly descending, got {} after {}",
                        entry.exponent, last.exponent
                    )));
                }
            }
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no groups
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate groups from the most significant one
    pub fn iter(&self) -> std::slice::Iter<'_, MagnitudeEntry> {
        self.entries.iter()
    }

    /// Value of the group at `exponent`, if recorded
    pub fn get(&self, exponent: u32) -> Option<u128> {
        self.entries
            .iter()
            .find(|entry| entry.exponent == exponent)
            .map(|entry| entry.value)
    }

    /// Remove the group at `exponent` and return its value
    pub fn remove(&mut self, exponent: u32) -> Option<u128> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.exponent == exponent)?;
        Some(self.entries.remove(index).value)
    }

    /// Least significant group
    pub fn last(&self) -> Option<&MagnitudeEntry> {
        self.entries.last()
    }

    /// Copy out the groups as `(exponent, value)` pairs
    pub fn to_pairs(&self) -> Vec<(u32, u128)> {
        self.entries
            .iter()
            .map(|entry| (entry.exponent, entry.value))
            .collect()
    }

    /// Split a non-negative whole number into digit groups of `step` digits
    pub(crate) fn from_whole(number: u128, step: usize) -> Result<Self> {
        if step < 1 {
            return Err(SpellError::InvalidValue(format!(
                "the power step must be >= 1, got {step}"
            )));
        }

        if number == 0 {
            return Ok(Self {
                entries: SmallVec::from_slice(&[MagnitudeEntry::new(0, 0)]),
            });
        }

        let digits = number.to_string();
        let digits = digits.as_bytes();
        let mut entries: SmallVec<[MagnitudeEntry; 9]> = SmallVec::new();

        // rchunks aligns groups from the least significant digit
        for (index, group) in digits.rchunks(step).enumerate() {
            let value = group
                .iter()
                .fold(0u128, |acc, digit| acc * 10 + u128::from(digit - b'0'));
            if value != 0 {
                let exponent = u32::try_from(index * step).map_err(|_| {
                    SpellError::InvalidValue(format!("exponent {} is too large", index * step))
                })?;
                entries.push(MagnitudeEntry::new(exponent, value));
            }
        }

        entries.reverse();
        Ok(Self { entries })
    }
}

impl<'a> IntoIterator for &'a MagnitudeMap {
    type Item = &'a MagnitudeEntry;
    type IntoIter = std::slice::Iter<'a, MagnitudeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Break a non-negative whole number into `(exponent, value)` digit groups
///
/// Groups are `step` digits wide, aligned from the least significant end, and
/// returned in descending exponent order. Only non-zero groups are kept; zero
/// itself decomposes to a single `(0, 0)` group.
///
/// ```
/// use numspell_core::decompose;
///
/// let map = decompose(123_456_789u64, 3).unwrap();
/// assert_eq!(map.to_pairs(), vec![(6, 123), (3, 456), (0, 789)]);
/// ```
pub fn decompose(number: impl Into<Numeral>, step: usize) -> Result<MagnitudeMap> {
    let whole = number.into().to_whole()?;
    MagnitudeMap::from_whole(whole, step)
}

/// Rebuild the number a [`MagnitudeMap`] represents
///
/// Computes Σ value × 10^exponent.
pub fn assemble(map: &MagnitudeMap) -> Result<u128> {
    if map.is_empty() {
        return Err(SpellError::InvalidValue(
            "cannot assemble an empty decomposition".to_string(),
        ));
    }

    map.iter().try_fold(0u128, |acc, entry| {
        10u128
            .checked_pow(entry.exponent)
            .and_then(|power| power.checked_mul(entry.value))
            .and_then(|term| acc.checked_add(term))
            .ok_or_else(|| {
                SpellError::Overflow(format!(
                    "{} × 10^{} does not fit the assembled value",
                    entry.value, entry.exponent
                ))
            })
    })
}
