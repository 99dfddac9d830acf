//! Beacon CLI - landing page build helper.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "beacon")]
#[command(about = "Inline a stylesheet and Markdown documents into a single HTML page")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to beacon.toml config file
    #[arg(short, long, default_value = "beacon.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the self-contained HTML page
    Build {
        /// Output file (defaults to config or "docs/index.html")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail if the shell lacks the stylesheet link or a placeholder
        #[arg(long)]
        strict: bool,

        /// Minify the stylesheet before inlining
        #[arg(long)]
        minify: bool,
    },

    /// Create beacon.toml and an HTML shell
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Print or write the CSS framework configuration
    Style {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit JSON instead of a JavaScript module
        #[arg(long)]
        json: bool,

        /// Only validate the configuration
        #[arg(long)]
        check: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Build {
            output,
            strict,
            minify,
        } => {
            commands::build::run(&cli.config, output, strict, minify).await?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Style {
            output,
            json,
            check,
        } => {
            commands::style::run(&cli.config, output, json, check).await?;
        }
    }

    Ok(())
}
