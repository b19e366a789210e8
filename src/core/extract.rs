//! Regex-driven extraction of translation keys from source text.

use regex::Regex;

use super::{KeySet, normalize_key};
use crate::error::{Result, ValidationError};

/// A compiled key pattern.
///
/// Capture group 1 yields the raw key. When `separator` is set, captured keys
/// are written in that convention and get normalized into the default one.
#[derive(Debug, Clone)]
pub struct KeyPattern {
    regex: Regex,
    separator: Option<String>,
}

impl KeyPattern {
    /// Compile a pattern, rejecting regexes without a capturing group.
    pub fn new(pattern: &str, separator: Option<&str>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| ValidationError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        // captures_len() counts the implicit whole-match group
        if regex.captures_len() < 2 {
            return Err(ValidationError::MissingCaptureGroup {
                pattern: pattern.to_string(),
            });
        }

        Ok(Self {
            regex,
            separator: separator.map(str::to_string),
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    /// Keys matched in `content`, normalized into `default_separator`, in match order.
    pub fn find_keys<'a>(
        &'a self,
        content: &'a str,
        default_separator: &'a str,
    ) -> impl Iterator<Item = String> + 'a {
        let from = self.separator.as_deref().unwrap_or(default_separator);
        self.regex
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(move |m| normalize_key(m.as_str(), from, default_separator))
    }
}

/// Scan `content` with every pattern, adding normalized keys to `keys`.
///
/// Patterns run independently and exhaustively, one after another, so the
/// same text can contribute keys through several patterns. A pattern whose
/// group 1 did not participate in a match contributes nothing for it.
pub fn extract_keys_into(
    content: &str,
    patterns: &[KeyPattern],
    default_separator: &str,
    keys: &mut KeySet,
) {
    for pattern in patterns {
        keys.extend(pattern.find_keys(content, default_separator));
    }
}

/// Scan `content` with every pattern and return the keys found.
pub fn extract_keys(content: &str, patterns: &[KeyPattern], default_separator: &str) -> KeySet {
    let mut keys = KeySet::new();
    extract_keys_into(content, patterns, default_separator, &mut keys);
    keys
}
