//! Domain layer: decomposition, assembly and the spelling grammar
//!
//! Everything here is a pure function of its inputs. Word tables are passed
//! in by reference and never mutated.

pub mod chunk;
pub mod magnitude;
pub mod numeral;
pub mod speller;

pub use chunk::spell_chunk;
pub use magnitude::{assemble, decompose, MagnitudeEntry, MagnitudeMap};
pub use numeral::{split_amount, ExactDecimal, Numeral, MAGNITUDE_LIMIT};
pub use speller::{
    render, spell_currency, spell_currency_detailed, spell_integer, spell_magnitude,
    CurrencySpelling, SpellOptions, CENT_DIGITS,
};
