//! Generate config command implementation

use anyhow::{anyhow, Context, Result};
use clap::Args;
use numspell_core::language::embedded_source;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Human-readable language name
    #[arg(short, long, value_name = "NAME", default_value = "Custom Language")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Replace the English words with the words of your language");
        println!("2. Validate your configuration:");
        println!(
            "   numspell validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for spelling:");
        println!(
            "   numspell spell '$12.50' --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template based on the embedded English tables
    fn generate_template(&self) -> Result<String> {
        let english =
            embedded_source("en").ok_or_else(|| anyhow!("English configuration is not embedded"))?;

        Ok(format!(
            "# Language configuration for {}\n{}",
            self.language_code,
            english
                .replacen(r#"code = "en""#, &format!("code = {:?}", self.language_code), 1)
                .replacen(r#"name = "English""#, &format!("name = {:?}", self.name), 1)
        ))
    }
}
