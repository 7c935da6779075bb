//! Reading values from input files

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads one value per line from text files
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read the values of a file, skipping blank lines and `#` comments
    pub fn read_values(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}
