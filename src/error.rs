//! Error taxonomy for key validation.
//!
//! Source read failures are soft (the file is skipped and reported), while
//! JSON read/parse failures and configuration errors abort a run. The
//! orchestrator turns every variant into a failed `ValidationResult`; the
//! build step turns `JsonSyntax`, `DuplicateKey` and `MissingKeys` into a
//! failing build.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Failed to read source file {path:?}: {message}")]
    SourceRead { path: PathBuf, message: String },

    #[error("Failed to read JSON file {path:?}: {message}")]
    JsonRead { path: PathBuf, message: String },

    #[error("Failed to parse JSON file {path:?}: {message}")]
    JsonParse { path: PathBuf, message: String },

    #[error("Invalid JSON in {path:?}: {message}")]
    JsonSyntax { path: PathBuf, message: String },

    #[error("Duplicate key in {path:?}: {message}")]
    DuplicateKey { path: PathBuf, message: String },

    #[error("Invalid key pattern \"{pattern}\": {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Key pattern \"{pattern}\" has no capturing group to extract the key from")]
    MissingCaptureGroup { pattern: String },

    #[error("Invalid glob pattern \"{pattern}\": {message}")]
    InvalidGlob { pattern: String, message: String },

    #[error("Key validation aborted: {message}")]
    Aborted { message: String },

    #[error("{message}")]
    MissingKeys {
        missing_keys: Vec<String>,
        message: String,
    },
}

impl ValidationError {
    /// Whether this error means the checked project is broken, as opposed
    /// to the tool being misconfigured.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            ValidationError::JsonSyntax { .. }
                | ValidationError::DuplicateKey { .. }
                | ValidationError::JsonParse { .. }
                | ValidationError::MissingKeys { .. }
        )
    }
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use crate::error::*;

    #[test]
    fn test_missing_keys_display_is_message() {
        let err = ValidationError::MissingKeys {
            missing_keys: vec!["a.b".to_string()],
            message: "Found 1 missing translation key: a.b".to_string(),
        };
        assert_eq!(err.to_string(), "Found 1 missing translation key: a.b");
        assert!(err.is_validation_failure());
    }

    #[test]
    fn test_config_errors_are_not_validation_failures() {
        let err = ValidationError::MissingCaptureGroup {
            pattern: "t\\('x'\\)".to_string(),
        };
        assert!(!err.is_validation_failure());
        assert!(err.to_string().contains("no capturing group"));
    }
}
