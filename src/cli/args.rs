//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `unused`: Display translations declared in locale files but never used
//! - `missed`: Display keys used in source files but missing from locale files
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Unused(cmd)) => cmd.common.verbose,
            Some(Command::Missed(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// The report as JSON on stdout
    Json,
}

/// Common arguments shared by the report commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Locale files directory (overrides config file)
    #[arg(long)]
    pub locales_path: Option<PathBuf>,

    /// Source code directory (overrides config file)
    #[arg(long)]
    pub src_path: Option<PathBuf>,

    /// Ignore translation calls inside comments
    #[arg(long)]
    pub ignore_comments: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct UnusedCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MissedCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display translations that no source file uses
    Unused(UnusedCommand),
    /// Display translation keys used in source files but missing from locale files
    Missed(MissedCommand),
    /// Initialize a new .i18n-unused.json configuration file
    Init,
}
