//! Final status lines for the `check` command.
//!
//! Diagnostics emitted during a run go through the `Reporter`; this module
//! only prints the closing verdict.

use std::io::{self, Write};

use colored::Colorize;

use crate::{build_step::BuildOutcome, error::ValidationError};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_success(outcome: &BuildOutcome) {
    print_success_to(outcome, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(outcome: &BuildOutcome, writer: &mut W) {
    let json_count = outcome.json_files.len();
    let mut line = format!(
        "Checked {} translation {}",
        json_count,
        if json_count == 1 { "file" } else { "files" }
    );

    if let Some(result) = &outcome.key_validation {
        let stats = &result.stats;
        line.push_str(&format!(
            " and {} {} from {} source {}",
            stats.source_keys,
            if stats.source_keys == 1 { "key" } else { "keys" },
            stats.source_files,
            if stats.source_files == 1 { "file" } else { "files" },
        ));
    }

    let warned = outcome.warned_keys().len();
    if warned == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{}, no issues found", line).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}, {} missing {} {}",
            SUCCESS_MARK.green(),
            line,
            warned,
            if warned == 1 { "key" } else { "keys" },
            "(strict mode is off)".dimmed()
        );
    }
}

pub fn print_failure(err: &ValidationError) {
    print_failure_to(err, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(err: &ValidationError, writer: &mut W) {
    match err {
        ValidationError::MissingKeys { missing_keys, .. } => {
            let count = missing_keys.len();
            // Failing builds list every key; only warnings are truncated.
            let _ = writeln!(
                writer,
                "{} {} missing translation {}: {}",
                FAILURE_MARK.red(),
                count,
                if count == 1 { "key" } else { "keys" },
                missing_keys.join(", ")
            );
        }
        other => {
            let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), other);
        }
    }
}
