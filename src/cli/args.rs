//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check translation file syntax and validate referenced keys
//! - `init`: Initialize a keycheck configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::reporter::LogLevel;

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
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Project root that globs are resolved against (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Config file to use instead of searching for .keycheckrc.json
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail when referenced keys are missing (overrides config file)
    #[arg(long, conflicts_with = "no_strict")]
    pub strict: bool,

    /// Only warn about missing keys (overrides config file)
    #[arg(long)]
    pub no_strict: bool,

    /// Nested key separator used in translation files (overrides config file)
    #[arg(long)]
    pub separator: Option<String>,

    /// Skip key validation and only check translation file syntax
    #[arg(long)]
    pub syntax_only: bool,

    /// Diagnostic output level (overrides config file)
    #[arg(long, value_enum, env = "KEYCHECK_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Enable verbose output (same as --log-level verbose)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Strictness requested on the command line, if any.
    pub fn strict_override(&self) -> Option<bool> {
        if self.strict {
            Some(true)
        } else if self.no_strict {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation files and report keys used in source but missing from them
    Check(CheckArgs),
    /// Initialize a new .keycheckrc.json configuration file
    Init(InitArgs),
}

#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Directory to create the config file in
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,
}
