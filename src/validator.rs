//! Key validation run: source scanning, JSON flattening and reconciliation.
//!
//! A run moves through [`Phase`]s in order. Source files that cannot be read
//! are reported and skipped; a translation file that cannot be read or parsed
//! ends the run. Whatever goes wrong, the public entry points return a
//! [`ValidationResult`] and never an error.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    config::KeyValidationConfig,
    core::{
        KeyPattern, KeySet, ValidationResult, ValidationStats, extract_keys,
        file_scanner::scan_files,
        flatten_keys_into,
        parsers::json::{JsonDocument, parse_json_file},
        reconcile,
    },
    error::{Result, ValidationError},
    reporter::{Level, Reporter},
};

/// Compiled form of [`KeyValidationConfig`] for a single run.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    pub patterns: Vec<KeyPattern>,
    pub source_file_patterns: Vec<String>,
    pub default_separator: String,
    pub strict: bool,
}

impl ExtractionConfig {
    pub fn from_options(options: &KeyValidationConfig) -> Result<Self> {
        let patterns = options
            .patterns
            .iter()
            .map(|p| KeyPattern::new(&p.regex, p.separator.as_deref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            source_file_patterns: options.source_files.clone(),
            default_separator: options.separator.clone(),
            strict: options.strict,
        })
    }
}

/// Stage of a validation run.
///
/// A run moves `Idle → ScanningSource → ScanningJson → Reconciling → Done`,
/// or from any non-terminal stage to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ScanningSource,
    ScanningJson,
    Reconciling,
    Done,
    Failed,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Done | Phase::Failed)
    }

    /// Whether a run in this stage may move to `next`.
    pub fn can_advance_to(self, next: Phase) -> bool {
        match (self, next) {
            (Phase::Idle, Phase::ScanningSource)
            | (Phase::ScanningSource, Phase::ScanningJson)
            | (Phase::ScanningJson, Phase::Reconciling)
            | (Phase::Reconciling, Phase::Done) => true,
            (current, Phase::Failed) => !current.is_terminal(),
            _ => false,
        }
    }

    fn advance(&mut self, next: Phase) {
        debug_assert!(self.can_advance_to(next), "{:?} -> {:?}", self, next);
        *self = next;
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "preparing",
            Phase::ScanningSource => "scanning source files",
            Phase::ScanningJson => "scanning translation files",
            Phase::Reconciling => "reconciling keys",
            Phase::Done => "done",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

enum JsonInput<'a> {
    Files(&'a [PathBuf]),
    Documents(&'a [JsonDocument]),
}

/// Validates that every key referenced in source files exists in the
/// translation files.
pub struct KeyValidator<'a> {
    options: &'a KeyValidationConfig,
    root: &'a Path,
    reporter: &'a dyn Reporter,
}

impl<'a> KeyValidator<'a> {
    /// `root` is the directory source globs are resolved against.
    pub fn new(options: &'a KeyValidationConfig, root: &'a Path, reporter: &'a dyn Reporter) -> Self {
        Self {
            options,
            root,
            reporter,
        }
    }

    /// Validate against translation files read and parsed by this run.
    pub fn validate(&self, json_files: &[PathBuf]) -> ValidationResult {
        self.run_guarded(JsonInput::Files(json_files))
    }

    /// Validate against translation files the caller has already parsed.
    pub fn validate_documents(&self, documents: &[JsonDocument]) -> ValidationResult {
        self.run_guarded(JsonInput::Documents(documents))
    }

    fn run_guarded(&self, json: JsonInput<'_>) -> ValidationResult {
        let mut phase = Phase::Idle;
        let mut stats = ValidationStats::default();

        match self.run(json, &mut phase, &mut stats) {
            Ok(result) => result,
            Err(e) => {
                // The error text travels in the result; callers decide how to show it.
                self.reporter.report(
                    Level::Verbose,
                    &format!("Key validation stopped while {}", phase),
                );
                phase.advance(Phase::Failed);
                ValidationResult::failure(e.to_string(), stats)
            }
        }
    }

    fn run(
        &self,
        json: JsonInput<'_>,
        phase: &mut Phase,
        stats: &mut ValidationStats,
    ) -> Result<ValidationResult> {
        let config = ExtractionConfig::from_options(self.options)?;

        phase.advance(Phase::ScanningSource);
        let source_keys = self.scan_sources(&config, stats)?;

        phase.advance(Phase::ScanningJson);
        let json_keys = self.scan_json(&config, json, stats)?;

        phase.advance(Phase::Reconciling);
        let missing_keys = reconcile(&source_keys, &json_keys);
        self.reporter.report(
            Level::Info,
            &format!(
                "Checked {} source {} against {} translation {}",
                source_keys.len(),
                if source_keys.len() == 1 { "key" } else { "keys" },
                json_keys.len(),
                if json_keys.len() == 1 { "key" } else { "keys" },
            ),
        );

        phase.advance(Phase::Done);
        Ok(ValidationResult::from_missing(
            missing_keys,
            config.strict,
            stats.clone(),
        ))
    }

    fn scan_sources(&self, config: &ExtractionConfig, stats: &mut ValidationStats) -> Result<KeySet> {
        let scan = scan_files(self.root, &config.source_file_patterns, &[])?;
        for skipped in &scan.skipped {
            self.reporter
                .report(Level::Warn, &format!("Cannot access path: {}", skipped));
        }
        if scan.files.is_empty() {
            self.reporter.report(
                Level::Warn,
                &format!(
                    "No source files matched {}",
                    config.source_file_patterns.join(", ")
                ),
            );
        }

        // Files are read in parallel; merging walks the results in input
        // order so discovery order does not depend on read completion.
        let per_file: Vec<(&PathBuf, Result<KeySet>)> = scan
            .files
            .par_iter()
            .map(|path| {
                let keys = read_source(path).map(|content| {
                    extract_keys(&content, &config.patterns, &config.default_separator)
                });
                (path, keys)
            })
            .collect();

        let mut source_keys = KeySet::new();
        for (path, result) in per_file {
            match result {
                Ok(file_keys) => {
                    stats.source_files += 1;
                    self.reporter.report(
                        Level::Verbose,
                        &format!("{}: {} key(s)", path.display(), file_keys.len()),
                    );
                    source_keys.extend_from(&file_keys);
                }
                Err(e) => {
                    stats.skipped_source_files += 1;
                    self.reporter.report(Level::Warn, &format!("{} (skipped)", e));
                }
            }
        }

        stats.source_keys = source_keys.len();
        Ok(source_keys)
    }

    fn scan_json(
        &self,
        config: &ExtractionConfig,
        json: JsonInput<'_>,
        stats: &mut ValidationStats,
    ) -> Result<KeySet> {
        let separator = config.default_separator.as_str();
        let mut json_keys = KeySet::new();

        match json {
            JsonInput::Files(paths) => {
                for path in paths {
                    let document = parse_json_file(path)?;
                    self.add_document(&document, separator, &mut json_keys);
                    stats.json_files += 1;
                }
            }
            JsonInput::Documents(documents) => {
                for document in documents {
                    self.add_document(document, separator, &mut json_keys);
                    stats.json_files += 1;
                }
            }
        }

        stats.json_keys = json_keys.len();
        Ok(json_keys)
    }

    fn add_document(&self, document: &JsonDocument, separator: &str, json_keys: &mut KeySet) {
        let before = json_keys.len();
        flatten_keys_into(&document.value, "", separator, json_keys);
        self.reporter.report(
            Level::Verbose,
            &format!(
                "{}: {} new key(s)",
                document.path.display(),
                json_keys.len() - before
            ),
        );
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ValidationError::SourceRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
