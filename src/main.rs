use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "scopedoc")]
#[command(about = "Generates the hub's permission scope reference table")]
#[command(version)]
struct Cli {
    /// Path to a scope definition TOML file (defaults to the built-in definitions)
    #[arg(short, long, global = true)]
    scopes: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the scope table and write it to scope-table.md
    Generate {
        /// Write the table to this path instead of scope-table.md
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the scope hierarchy (dangling subscopes, cycles, duplicate parents)
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Generate { output }) => {
            cli::generate::generate_command(cli.scopes.as_deref(), output)?;
        }
        Some(Commands::Check) => {
            cli::check::check_command(cli.scopes.as_deref())?;
        }
        None => {
            // Default: run the full generation pipeline
            cli::generate::generate_command(cli.scopes.as_deref(), None)?;
        }
    }

    Ok(())
}
