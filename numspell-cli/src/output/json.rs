//! JSON output formatter

use super::{OutputFormatter, SpelledValue};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs all values as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    values: Vec<SpelledValue>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            values: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_value(&mut self, value: &SpelledValue) -> Result<()> {
        self.values.push(value.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.values)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.values)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            let mut rounded = SpelledValue::spelled("$0.999", true, "One dollar".into());
            rounded.rounded_to = Some("1.00".into());
            formatter.format_value(&rounded).unwrap();
            formatter
                .format_value(&SpelledValue::failed("x", false, "Invalid input: 'x' is not a number"))
                .unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<SpelledValue> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text.as_deref(), Some("One dollar"));
        assert_eq!(parsed[0].rounded_to.as_deref(), Some("1.00"));
        assert!(parsed[1].is_error());

        let raw = String::from_utf8(buffer).unwrap();
        assert!(!raw.contains("\"error\":null"));
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
