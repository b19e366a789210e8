use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern, glob_with};
use walkdir::WalkDir;

use crate::error::{Result, ValidationError};

/// Check if a pattern contains glob syntax (`*`, `?` or a `[...]` class).
/// Patterns without it are treated as literal file or directory paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Result of resolving file patterns.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matched files, in pattern order, sorted within each pattern, no duplicates.
    pub files: Vec<PathBuf>,
    /// Paths that could not be accessed while expanding patterns.
    pub skipped: Vec<String>,
}

enum IgnoreRule {
    Prefix(PathBuf),
    Glob(Pattern),
}

impl IgnoreRule {
    fn parse(pattern: &str) -> Result<Self> {
        if is_glob_pattern(pattern) {
            Pattern::new(pattern)
                .map(IgnoreRule::Glob)
                .map_err(|e| ValidationError::InvalidGlob {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })
        } else {
            Ok(IgnoreRule::Prefix(PathBuf::from(
                pattern.trim_start_matches("./"),
            )))
        }
    }

    fn matches(&self, relative: &Path) -> bool {
        match self {
            IgnoreRule::Prefix(prefix) => relative.starts_with(prefix),
            IgnoreRule::Glob(pattern) => pattern.matches_path_with(relative, MATCH_OPTIONS),
        }
    }
}

/// Resolve `patterns` relative to `root` into concrete files.
///
/// Glob patterns are expanded with the `glob` crate; literal directories are
/// walked recursively; literal files are kept even when they do not exist so
/// that reading them reports the problem. `ignores` are matched against the
/// path relative to `root`.
pub fn scan_files(root: &Path, patterns: &[String], ignores: &[String]) -> Result<ScanResult> {
    let ignore_rules = ignores
        .iter()
        .map(|p| IgnoreRule::parse(p))
        .collect::<Result<Vec<_>>>()?;

    let mut result = ScanResult::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for pattern in patterns {
        // An existing path like `app/[locale]` is taken literally even though
        // it parses as a character class.
        let literal_exists = !pattern.contains(['*', '?']) && root.join(pattern).exists();
        let mut matched = if is_glob_pattern(pattern) && !literal_exists {
            expand_glob(root, pattern, &mut result.skipped)?
        } else {
            expand_literal(root, pattern, &mut result.skipped)
        };
        matched.sort();

        for path in matched {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            if ignore_rules.iter().any(|rule| rule.matches(relative)) {
                continue;
            }
            if seen.insert(path.clone()) {
                result.files.push(path);
            }
        }
    }

    Ok(result)
}

fn expand_glob(root: &Path, pattern: &str, skipped: &mut Vec<String>) -> Result<Vec<PathBuf>> {
    let full_pattern = if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        let escaped_root = Pattern::escape(&root.to_string_lossy());
        format!(
            "{}/{}",
            escaped_root.trim_end_matches('/'),
            pattern.trim_start_matches("./")
        )
    };

    let entries = glob_with(&full_pattern, MATCH_OPTIONS).map_err(|e| {
        ValidationError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        }
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => skipped.push(e.to_string()),
        }
    }
    Ok(files)
}

fn expand_literal(root: &Path, pattern: &str, skipped: &mut Vec<String>) -> Vec<PathBuf> {
    let path = root.join(pattern.trim_start_matches("./"));
    if !path.is_dir() {
        return vec![path];
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&path) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => skipped.push(e.to_string()),
        }
    }
    files
}
