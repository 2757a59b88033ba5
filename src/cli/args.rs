// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::export::ExportFormat;

/// commit-policy - Commit message lint policy
///
/// Inspect the project's commit lint rules and export them for the linter.
#[derive(Parser, Debug)]
#[command(name = "commit-policy")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message lint policy", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to show if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the effective rule table (default command)
    Show(ShowArgs),

    /// Write the policy as a linter configuration file
    Export(ExportArgs),

    /// Initialize commit-policy configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the show command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ShowArgs {
    /// Show a single rule
    #[arg(value_name = "RULE")]
    pub rule: Option<String>,
}

/// Arguments for the export command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ExportArgs {
    /// File format (defaults to the configured format)
    #[arg(value_enum, value_name = "FORMAT")]
    pub target: Option<ExportFormat>,

    /// Output file (defaults to the format's file name at the repository root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Show if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Show(ShowArgs::default()))
    }
}
