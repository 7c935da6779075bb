//! numspell command-line interface

use anyhow::Result;
use clap::Parser;
use numspell_cli::commands::Commands;

/// Spell integers and currency amounts in words
#[derive(Debug, Parser)]
#[command(name = "numspell", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
