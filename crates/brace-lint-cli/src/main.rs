//! brace-lint CLI tool.
//!
//! Usage:
//! ```bash
//! brace-lint check [OPTIONS] [PATH]
//! brace-lint list-rules
//! brace-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Brace placement linter for JavaScript sources
#[derive(Parser)]
#[command(name = "brace-lint")]
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

        /// Rewrite files with the available whitespace fixes
        #[arg(long)]
        fix: bool,

        /// Override the configured brace style
        #[arg(long)]
        style: Option<StyleArg>,

        /// Exempt blocks whose braces share one line
        #[arg(long)]
        allow_single_line: bool,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Source snippets with labels.
    Pretty,
}

/// Brace style selectable from the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StyleArg {
    /// One true brace style.
    #[value(name = "1tbs")]
    OneTrueBrace,
    /// Stroustrup style.
    Stroustrup,
    /// Allman style.
    Allman,
}

impl StyleArg {
    /// Returns the configuration name of this style.
    #[must_use]
    pub fn config_name(self) -> &'static str {
        match self {
            Self::OneTrueBrace => "1tbs",
            Self::Stroustrup => "stroustrup",
            Self::Allman => "allman",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            fix,
            style,
            allow_single_line,
            exclude,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                format,
                fix,
                style,
                allow_single_line,
                exclude,
            };
            commands::check::run(&path, &options, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
