//! High-level spelling API
//!
//! [`Speller`] bundles a language's word tables with output options so that
//! callers do not have to thread the tables through every call.

mod config;
mod speller;

pub use config::{defaults, Config, ConfigBuilder};
pub use speller::Speller;
