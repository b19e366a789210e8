use serde::Serialize;

use super::KeySet;

/// Counters collected during a validation run, for reporting only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStats {
    pub source_files: usize,
    pub skipped_source_files: usize,
    pub json_files: usize,
    pub source_keys: usize,
    pub json_keys: usize,
}

/// Outcome of one key validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub success: bool,
    /// Keys referenced in source but absent from the translation files, in
    /// source discovery order.
    pub missing_keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub stats: ValidationStats,
}

impl ValidationResult {
    /// Build the result for a finished reconciliation.
    ///
    /// Missing keys only fail the run in strict mode.
    pub fn from_missing(missing_keys: Vec<String>, strict: bool, stats: ValidationStats) -> Self {
        let success = missing_keys.is_empty() || !strict;
        let error_message = (!success).then(|| missing_keys_message(&missing_keys));
        Self {
            success,
            missing_keys,
            error_message,
            stats,
        }
    }

    /// A run that could not complete.
    pub fn failure(message: impl Into<String>, stats: ValidationStats) -> Self {
        Self {
            success: false,
            missing_keys: Vec::new(),
            error_message: Some(message.into()),
            stats,
        }
    }
}

/// Every source key that the translation files do not define, in source order.
pub fn reconcile(source_keys: &KeySet, json_keys: &KeySet) -> Vec<String> {
    source_keys
        .iter()
        .filter(|key| !json_keys.contains(key))
        .map(str::to_string)
        .collect()
}

/// Error text listing every missing key, untruncated.
pub fn missing_keys_message(missing_keys: &[String]) -> String {
    format!(
        "Found {} missing translation {}: {}",
        missing_keys.len(),
        if missing_keys.len() == 1 { "key" } else { "keys" },
        missing_keys.join(", ")
    )
}
