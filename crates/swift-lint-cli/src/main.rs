//! swift-lint CLI tool.
//!
//! Usage:
//! ```bash
//! swift-lint check [OPTIONS] [PATH]
//! swift-lint rules [--verbose] [RULE]
//! swift-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter for Swift sources
#[derive(Parser)]
#[command(name = "swift-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated names or codes).
        /// Opt-in rules named here are enabled.
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List available rules, or print the documentation of one
    Rules {
        /// Rule name or code
        rule: Option<String>,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// Source snippets with the offending literal underlined.
    Pretty,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            rules,
            exclude,
        } => {
            let lookup = config_resolver::ConfigLookup::new(cli.config.as_deref());
            let failed = commands::check::run(&path, format, rules.as_deref(), exclude, &lookup)?;
            if failed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Rules { rule } => commands::list_rules::run(rule.as_deref(), cli.verbose),
        Commands::Init { force } => commands::init::run(force),
    }
}
