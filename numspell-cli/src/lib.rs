//! numspell CLI library
//!
//! This library provides the command-line interface for spelling integers
//! and currency amounts in words.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;

pub use error::{CliError, CliResult};
