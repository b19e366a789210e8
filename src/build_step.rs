//! The build-time check: JSON syntax over `paths`, then key validation.
//!
//! This is the integration point a build tool calls once per build. An `Err`
//! means the build must stop; missing keys in non-strict mode only produce
//! a warning through the reporter.

use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    core::{
        ValidationResult,
        file_scanner::scan_files,
        parsers::json::{JsonDocument, check_json_file},
    },
    error::{Result, ValidationError},
    reporter::{Level, Reporter, summarize_missing_keys},
    validator::KeyValidator,
};

/// What a successful build step checked.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Translation files that passed the syntax check, in check order.
    pub json_files: Vec<PathBuf>,
    /// `None` when key validation is disabled.
    pub key_validation: Option<ValidationResult>,
}

impl BuildOutcome {
    /// Missing keys tolerated because strict mode is off.
    pub fn warned_keys(&self) -> &[String] {
        self.key_validation
            .as_ref()
            .map(|result| result.missing_keys.as_slice())
            .unwrap_or_default()
    }
}

/// Run the whole check for the project at `root`.
///
/// Syntax checking stops at the first invalid file; later files are not
/// checked. Parsed documents are reused for key validation so every
/// translation file is read once.
pub fn run_build_step(config: &Config, root: &Path, reporter: &dyn Reporter) -> Result<BuildOutcome> {
    let scan = scan_files(root, &config.paths, &config.ignore_files)?;
    for skipped in &scan.skipped {
        reporter.report(Level::Warn, &format!("Cannot access path: {}", skipped));
    }
    if scan.files.is_empty() {
        reporter.report(
            Level::Warn,
            &format!("No translation files matched {}", config.paths.join(", ")),
        );
    }

    let mut documents: Vec<JsonDocument> = Vec::with_capacity(scan.files.len());
    for path in &scan.files {
        let document = check_json_file(path, config.allow_duplicate_keys)?;
        reporter.report(Level::Verbose, &format!("{}: valid JSON", path.display()));
        documents.push(document);
    }

    let key_validation = match &config.key_validation {
        Some(options) => {
            let result = KeyValidator::new(options, root, reporter).validate_documents(&documents);
            check_key_validation(&result, reporter)?;
            Some(result)
        }
        None => None,
    };

    Ok(BuildOutcome {
        json_files: scan.files,
        key_validation,
    })
}

fn check_key_validation(result: &ValidationResult, reporter: &dyn Reporter) -> Result<()> {
    if !result.success {
        let message = result
            .error_message
            .clone()
            .unwrap_or_else(|| "key validation failed".to_string());
        if result.missing_keys.is_empty() {
            return Err(ValidationError::Aborted { message });
        }
        return Err(ValidationError::MissingKeys {
            missing_keys: result.missing_keys.clone(),
            message,
        });
    }

    if !result.missing_keys.is_empty() {
        reporter.report(
            Level::Warn,
            &format!(
                "Found {} missing translation {} (strict mode is off): {}",
                result.missing_keys.len(),
                if result.missing_keys.len() == 1 { "key" } else { "keys" },
                summarize_missing_keys(&result.missing_keys)
            ),
        );
    }

    Ok(())
}
