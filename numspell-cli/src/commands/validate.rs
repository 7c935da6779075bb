//! Validate command implementation

use anyhow::Result;
use clap::Args;
use numspell_core::{LanguageConfig, Speller};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        let result = LanguageConfig::from_file(&self.language_config)
            .and_then(|config| Speller::from_language_config(&config));

        match result {
            Ok(speller) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", speller.language_code());
                println!("  Language name: {}", speller.language_name());
                if let Ok(sample) = speller.spell_currency(numspell_core::Decimal::new(12345, 2)) {
                    println!("  Sample (123.45): {sample}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
