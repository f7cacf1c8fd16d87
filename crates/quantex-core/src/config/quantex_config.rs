//! Top-level quantex configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BatchConfig, LexiconConfig, LocaleConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`QUANTEX_*`)
/// 3. Project config (`quantex.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuantexConfig {
    pub locale: LocaleConfig,
    pub lexicon: LexiconConfig,
    pub batch: BatchConfig,
}

/// Caller-supplied overrides that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub language: Option<String>,
    pub decimal_separator: Option<char>,
    pub thousands_separator: Option<char>,
    pub lexicon_path: Option<PathBuf>,
    pub batch_threads: Option<usize>,
}

impl QuantexConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &QuantexConfig) -> Result<(), ConfigError> {
        config.locale.resolve()?;
        if let Some(chunk) = config.batch.chunk_size {
            if chunk == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "batch.chunk_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref path) = config.lexicon.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "lexicon.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut QuantexConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: QuantexConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut QuantexConfig, other: &QuantexConfig) {
        if other.locale.language.is_some() {
            base.locale.language = other.locale.language.clone();
        }
        if other.locale.decimal_separator.is_some() {
            base.locale.decimal_separator = other.locale.decimal_separator;
        }
        if other.locale.thousands_separator.is_some() {
            base.locale.thousands_separator = other.locale.thousands_separator;
        }

        if other.lexicon.path.is_some() {
            base.lexicon.path = other.lexicon.path.clone();
        }

        if other.batch.threads.is_some() {
            base.batch.threads = other.batch.threads;
        }
        if other.batch.chunk_size.is_some() {
            base.batch.chunk_size = other.batch.chunk_size;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `QUANTEX_LOCALE_LANGUAGE`, `QUANTEX_BATCH_THREADS`, etc.
    fn apply_env_overrides(config: &mut QuantexConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("QUANTEX_LOCALE_LANGUAGE") {
            config.locale.language = Some(val);
        }
        if let Ok(val) = std::env::var("QUANTEX_DECIMAL_SEPARATOR") {
            config.locale.decimal_separator = Some(single_char("QUANTEX_DECIMAL_SEPARATOR", &val)?);
        }
        if let Ok(val) = std::env::var("QUANTEX_THOUSANDS_SEPARATOR") {
            config.locale.thousands_separator =
                Some(single_char("QUANTEX_THOUSANDS_SEPARATOR", &val)?);
        }
        if let Ok(val) = std::env::var("QUANTEX_LEXICON_PATH") {
            config.lexicon.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("QUANTEX_BATCH_THREADS") {
            let threads = val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                field: "QUANTEX_BATCH_THREADS".to_string(),
                message: format!("expected a thread count, got '{val}'"),
            })?;
            config.batch.threads = Some(threads);
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut QuantexConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.language {
            config.locale.language = Some(v.clone());
        }
        if let Some(v) = overrides.decimal_separator {
            config.locale.decimal_separator = Some(v);
        }
        if let Some(v) = overrides.thousands_separator {
            config.locale.thousands_separator = Some(v);
        }
        if let Some(ref v) = overrides.lexicon_path {
            config.lexicon.path = Some(v.clone());
        }
        if let Some(v) = overrides.batch_threads {
            config.batch.threads = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Separators come from the environment as strings; exactly one char is allowed.
fn single_char(field: &str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("expected a single character, got '{value}'"),
        }),
    }
}
