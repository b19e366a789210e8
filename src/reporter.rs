//! Reporting channel for diagnostics produced while validating.
//!
//! The core never prints. The orchestrator and build step send messages
//! through a [`Reporter`], and the configured [`LogLevel`] decides what the
//! console shows.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// Missing-key lists up to this length are shown in full in warnings.
pub const MAX_FULL_DISPLAY: usize = 20;

/// Number of keys shown before the "+N more" suffix for longer lists.
pub const TRUNCATED_DISPLAY: usize = 10;

/// Severity of a single reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Error,
    Warn,
    Info,
    Verbose,
}

/// Configured verbosity threshold.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    #[default]
    Info,
    Verbose,
}

impl LogLevel {
    /// Whether a message at `level` passes this threshold.
    pub fn allows(self, level: Level) -> bool {
        let threshold = match self {
            LogLevel::Silent => return false,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Verbose => Level::Verbose,
        };
        level <= threshold
    }
}

pub trait Reporter: Send + Sync {
    fn report(&self, level: Level, message: &str);
}

/// Writes messages to stderr, cargo-style.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    log_level: LogLevel,
}

impl ConsoleReporter {
    pub fn new(log_level: LogLevel) -> Self {
        Self { log_level }
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Write a message to a custom writer, applying the level filter.
    pub fn report_to<W: Write>(&self, level: Level, message: &str, writer: &mut W) {
        if self.log_level.allows(level) {
            let _ = writeln!(writer, "{} {}", prefix(level), message);
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        self.report_to(level, message, &mut io::stderr().lock());
    }
}

fn prefix(level: Level) -> ColoredString {
    match level {
        Level::Error => "error:".bold().red(),
        Level::Warn => "warning:".bold().yellow(),
        Level::Info => "info:".bold().cyan(),
        Level::Verbose => "note:".dimmed(),
    }
}

/// Keeps every message in memory, unfiltered.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    entries: Mutex<Vec<(Level, String)>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Messages reported at exactly `level`, in report order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, level: Level, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((level, message.to_string()));
    }
}

/// Human-readable list of missing keys for warnings.
///
/// Lists of up to [`MAX_FULL_DISPLAY`] keys are shown in full; longer lists
/// show the first [`TRUNCATED_DISPLAY`] keys followed by `+N more`.
pub fn summarize_missing_keys(keys: &[String]) -> String {
    if keys.len() <= MAX_FULL_DISPLAY {
        return keys.join(", ");
    }
    format!(
        "{}, +{} more",
        keys[..TRUNCATED_DISPLAY].join(", "),
        keys.len() - TRUNCATED_DISPLAY
    )
}
