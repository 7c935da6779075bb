//! Plain text output formatter

use super::{OutputFormatter, SpelledValue};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one spelling per line
///
/// Failed values are reported on stderr so that the output only holds words.
pub struct TextFormatter<W: Write> {
    writer: W,
    echo: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter; `echo` prefixes each line with its input
    pub fn new(writer: W, echo: bool) -> Self {
        Self { writer, echo }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_value(&mut self, value: &SpelledValue) -> Result<()> {
        match (&value.text, &value.error) {
            (_, Some(error)) => eprintln!("{}: {error}", value.input),
            (Some(text), None) if self.echo => writeln!(self.writer, "{}: {text}", value.input)?,
            (Some(text), None) => writeln!(self.writer, "{text}")?,
            (None, None) => {}
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(values: &[SpelledValue], echo: bool) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, echo);
            for value in values {
                formatter.format_value(value).unwrap();
            }
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_one_line_per_value() {
        let values = [
            SpelledValue::spelled("14", false, "Fourteen".into()),
            SpelledValue::spelled("$1.01", true, "One dollar and one cent".into()),
        ];
        assert_eq!(
            render(&values, false),
            "Fourteen\nOne dollar and one cent\n"
        );
    }

    #[test]
    fn test_echo_prefixes_input() {
        let values = [SpelledValue::spelled("14", false, "Fourteen".into())];
        assert_eq!(render(&values, true), "14: Fourteen\n");
    }

    #[test]
    fn test_errors_are_not_written_to_output() {
        let values = [SpelledValue::failed("abc", false, "Invalid input")];
        assert_eq!(render(&values, false), "");
    }
}
