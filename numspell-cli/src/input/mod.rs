//! Input handling module

pub mod amount_parser;
pub mod file_reader;
pub mod glob_resolver;

pub use amount_parser::{parse_value, ParsedValue, Separators, AVAILABLE_SEPARATORS};
pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
