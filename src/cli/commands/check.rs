use std::env;

use anyhow::{Context, Ok, Result};

use super::super::{
    args::CheckArgs,
    exit_status::ExitStatus,
    report::{print_failure, print_success},
};
use crate::{
    build_step::run_build_step,
    config::{Config, load_config, load_config_file},
    reporter::{ConsoleReporter, Level, LogLevel, Reporter},
};

pub fn check(args: CheckArgs) -> Result<ExitStatus> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => env::current_dir().context("Failed to determine the current directory")?,
    };

    let loaded = match &args.config {
        Some(path) => load_config_file(path)?,
        None => load_config(&root)?,
    };
    let config = apply_overrides(loaded.config, &args)?;

    let reporter = ConsoleReporter::new(effective_log_level(&config, &args));
    match &loaded.path {
        Some(path) => reporter.report(Level::Verbose, &format!("Using config {}", path.display())),
        None => reporter.report(Level::Verbose, "No config file found, using defaults"),
    }

    match run_build_step(&config, &root, &reporter) {
        std::result::Result::Ok(outcome) => {
            if reporter.log_level() != LogLevel::Silent {
                print_success(&outcome);
            }
            Ok(ExitStatus::Success)
        }
        Err(err) if err.is_validation_failure() => {
            print_failure(&err);
            Ok(ExitStatus::Failure)
        }
        Err(err) => Err(err.into()),
    }
}

/// Apply command-line overrides on top of the loaded config.
fn apply_overrides(mut config: Config, args: &CheckArgs) -> Result<Config> {
    if args.syntax_only {
        config.key_validation = None;
    }

    if let Some(options) = config.key_validation.as_mut() {
        if let Some(strict) = args.strict_override() {
            options.strict = strict;
        }
        if let Some(separator) = &args.separator {
            options.separator = separator.clone();
        }
        if let Some(log_level) = args.log_level {
            options.log_level = log_level;
        }
        options.validate()?;
    }

    Ok(config)
}

fn effective_log_level(config: &Config, args: &CheckArgs) -> LogLevel {
    if args.verbose {
        return LogLevel::Verbose;
    }
    args.log_level
        .or_else(|| config.key_validation.as_ref().map(|options| options.log_level))
        .unwrap_or_default()
}
