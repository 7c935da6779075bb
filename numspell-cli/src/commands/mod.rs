//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod spell;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Spell integers and currency amounts in words
    Spell(spell::SpellArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Spell(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for code in numspell_core::language::list_available_languages() {
                    let config = numspell_core::language::get_language_config(code)?;
                    println!("  {:<4} {}", code, config.metadata.name);
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for (name, description) in spell::OutputFormat::ALL {
                    println!("  {name:<6} {description}");
                }
            }
        }
        Ok(())
    }
}
