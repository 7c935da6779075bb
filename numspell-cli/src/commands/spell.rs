//! Spell command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{parse_value, resolve_patterns, FileReader, ParsedValue, Separators};
use crate::language_source::LanguageSource;
use crate::output::{JsonFormatter, OutputFormatter, SpelledValue, TextFormatter};
use anyhow::{bail, Context, Result};
use clap::Args;
use numspell_core::Speller;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the spell command
#[derive(Debug, Args)]
pub struct SpellArgs {
    /// Values to spell; a `$` marks a currency amount
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Files with one value per line (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's choice)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Embedded language code or name
    #[arg(short, long, conflicts_with = "language_config")]
    pub language: Option<String>,

    /// External language configuration file (TOML)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Digit group separator; must differ from the decimal mark (set both to swap them)
    #[arg(long, value_name = "CHAR")]
    pub separator: Option<char>,

    /// Decimal mark
    #[arg(long, value_name = "CHAR")]
    pub decimal: Option<char>,

    /// CLI configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Prefix each text line with its input value
    #[arg(long)]
    pub echo: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One spelling per line
    Text,
    /// JSON array of values with their spelling
    Json,
}

impl OutputFormat {
    /// All formats with a short description
    pub const ALL: [(&'static str, &'static str); 2] = [
        ("text", "One spelling per line"),
        ("json", "JSON array with input, text, rounding and errors"),
    ];

    fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::ConfigError(format!("unknown output format '{other}'")).into()),
        }
    }
}

impl SpellArgs {
    /// Execute the spell command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let separators = Separators::new(
            self.separator.unwrap_or(config.input.separator),
            self.decimal.unwrap_or(config.input.decimal),
        )?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format)?,
        };

        let source = self.language_source(&config);
        log::info!("Language: {}", source.display_name());
        let speller = source
            .speller(config.language.capitalize_currency)
            .map_err(CliError::from)?;

        let values = self.collect_values()?;
        if values.is_empty() {
            bail!(CliError::InvalidInput(
                "no values given, pass values or --input".to_string()
            ));
        }
        log::info!("Spelling {} value(s)", values.len());

        let mut formatter = self.formatter(format, config.output.pretty_json)?;
        let mut failures = 0usize;
        for raw in &values {
            let spelled = spell_value(&speller, raw, &separators);
            if spelled.is_error() {
                failures += 1;
            }
            formatter.format_value(&spelled)?;
        }
        formatter.finish()?;

        if failures > 0 {
            bail!("{failures} of {} value(s) could not be spelled", values.len());
        }

        Ok(())
    }

    fn language_source(&self, config: &CliConfig) -> LanguageSource {
        match (&self.language_config, &self.language) {
            (Some(path), _) => LanguageSource::External(path.clone()),
            (None, Some(code)) => LanguageSource::BuiltIn(code.clone()),
            (None, None) => LanguageSource::BuiltIn(config.language.default.clone()),
        }
    }

    /// Command-line values first, then file values in path order
    fn collect_values(&self) -> Result<Vec<String>> {
        let mut values = self.values.clone();

        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                log::debug!("Reading {}", path.display());
                values.extend(FileReader::read_values(&path)?);
            }
        }

        Ok(values)
    }

    fn formatter(&self, format: OutputFormat, pretty: bool) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn io::Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, self.echo)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Parse and spell one raw value
pub fn spell_value(speller: &Speller, raw: &str, separators: &Separators) -> SpelledValue {
    let parsed = match parse_value(raw, separators) {
        Ok(parsed) => parsed,
        Err(e) => return SpelledValue::failed(raw, raw.contains('$'), e),
    };

    match parsed {
        ParsedValue::Integer(number) => match speller.spell_integer(number) {
            Ok(text) if text.is_empty() => {
                SpelledValue::spelled(raw, false, speller.zero_phrase(false))
            }
            Ok(text) => SpelledValue::spelled(raw, false, text),
            Err(e) => SpelledValue::failed(raw, false, CliError::from(e)),
        },
        ParsedValue::Currency(amount) => match speller.spell_currency_detailed(amount) {
            Ok(spelling) => {
                let text = if spelling.text.is_empty() {
                    speller.zero_phrase(true)
                } else {
                    spelling.text
                };
                let mut spelled = SpelledValue::spelled(raw, true, text);
                if let Some(notice) = spelling.rounding {
                    log::warn!("{raw}: {notice}");
                    spelled.rounded_to = Some(notice.rounded.to_string());
                }
                spelled
            }
            Err(e) => SpelledValue::failed(raw, true, CliError::from(e)),
        },
    }
}
