use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
    core::{KeyPattern, file_scanner::is_glob_pattern},
    reporter::LogLevel,
};

pub const CONFIG_FILE_NAME: &str = ".keycheckrc.json";

pub const DEFAULT_KEY_PATTERN: &str = r#"t\(\s*['"`]([^'"`]+)['"`]"#;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Globs selecting the JSON translation files.
    #[serde(default = "default_paths")]
    pub paths: Vec<String>,
    #[serde(default)]
    pub allow_duplicate_keys: bool,
    /// Globs (or path prefixes) excluded from `paths`.
    #[serde(default)]
    pub ignore_files: Vec<String>,
    /// `false` or absent disables key validation.
    #[serde(
        default,
        deserialize_with = "deserialize_key_validation",
        serialize_with = "serialize_key_validation"
    )]
    pub key_validation: Option<KeyValidationConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValidationConfig {
    #[serde(default = "default_patterns")]
    pub patterns: Vec<PatternConfig>,
    #[serde(default = "default_source_files")]
    pub source_files: Vec<String>,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_strict")]
    pub strict: bool,
    #[serde(default)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PatternConfig {
    pub regex: String,
    /// Separator used by keys this pattern captures, when not the default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

impl PatternConfig {
    pub fn new(regex: impl Into<String>) -> Self {
        Self {
            regex: regex.into(),
            separator: None,
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }
}

fn default_paths() -> Vec<String> {
    vec!["locales/**/*.json".to_string()]
}

fn default_patterns() -> Vec<PatternConfig> {
    vec![PatternConfig::new(DEFAULT_KEY_PATTERN)]
}

fn default_source_files() -> Vec<String> {
    ["ts", "tsx", "js", "jsx"]
        .iter()
        .map(|ext| format!("src/**/*.{}", ext))
        .collect()
}

fn default_separator() -> String {
    ".".to_string()
}

fn default_strict() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            allow_duplicate_keys: false,
            ignore_files: Vec::new(),
            key_validation: None,
        }
    }
}

impl Default for KeyValidationConfig {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            source_files: default_source_files(),
            separator: default_separator(),
            strict: default_strict(),
            log_level: LogLevel::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeyValidationSetting {
    Toggle(bool),
    Enabled(KeyValidationConfig),
}

fn deserialize_key_validation<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<KeyValidationConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<KeyValidationSetting>::deserialize(deserializer)? {
        None | Some(KeyValidationSetting::Toggle(false)) => std::result::Result::Ok(None),
        Some(KeyValidationSetting::Toggle(true)) => Err(de::Error::custom(
            "'keyValidation' must be false or an object with patterns and sourceFiles",
        )),
        Some(KeyValidationSetting::Enabled(config)) => std::result::Result::Ok(Some(config)),
    }
}

fn serialize_key_validation<S>(
    value: &Option<KeyValidationConfig>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(config) => config.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

fn validate_globs(field: &str, patterns: &[String]) -> Result<()> {
    for pattern in patterns {
        if is_glob_pattern(pattern) {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", field, pattern))?;
        }
    }
    Ok(())
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, key patterns that do not
    /// compile or lack a capturing group, and empty separators.
    pub fn validate(&self) -> Result<()> {
        validate_globs("paths", &self.paths)?;
        validate_globs("ignoreFiles", &self.ignore_files)?;

        if let Some(key_validation) = &self.key_validation {
            key_validation.validate()?;
        }

        Ok(())
    }
}

impl KeyValidationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            bail!("'keyValidation.separator' must not be empty");
        }
        if self.patterns.is_empty() {
            bail!("'keyValidation.patterns' must contain at least one pattern");
        }
        for pattern in &self.patterns {
            if pattern.separator.as_deref() == Some("") {
                bail!(
                    "Separator for key pattern \"{}\" must not be empty",
                    pattern.regex
                );
            }
            KeyPattern::new(&pattern.regex, pattern.separator.as_deref())
                .context("Invalid entry in 'keyValidation.patterns'")?;
        }
        validate_globs("keyValidation.sourceFiles", &self.source_files)
    }
}

/// Default configuration written by `keycheck init`, with key validation on.
pub fn default_config_json() -> Result<String> {
    let config = Config {
        key_validation: Some(KeyValidationConfig::default()),
        ..Default::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Find and load the config file starting at `start_dir`, falling back to defaults.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(ConfigLoadResult {
        config,
        path: Some(path.to_path_buf()),
    })
}
