//! Locale configuration.
//!
//! Number formatting conventions are bound to one engine instance. Nothing
//! here touches process-wide locale state, so engines with different locales
//! can run side by side.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DECIMAL_SEPARATOR, DEFAULT_LANGUAGE, DEFAULT_THOUSANDS_SEPARATOR};
use crate::errors::ConfigError;

/// Locale settings as they appear in `quantex.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LocaleConfig {
    /// Language code for spelled-out numbers. Default: "en".
    pub language: Option<String>,
    /// Decimal separator. Default: '.'.
    pub decimal_separator: Option<char>,
    /// Thousands separator. Default: ','.
    pub thousands_separator: Option<char>,
}

impl LocaleConfig {
    /// Returns the effective language, defaulting to "en".
    pub fn effective_language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Returns the effective decimal separator, defaulting to '.'.
    pub fn effective_decimal_separator(&self) -> char {
        self.decimal_separator.unwrap_or(DEFAULT_DECIMAL_SEPARATOR)
    }

    /// Returns the effective thousands separator, defaulting to ','.
    pub fn effective_thousands_separator(&self) -> char {
        self.thousands_separator.unwrap_or(DEFAULT_THOUSANDS_SEPARATOR)
    }

    /// Resolve into a validated [`Locale`].
    pub fn resolve(&self) -> Result<Locale, ConfigError> {
        Locale::new(
            self.effective_language(),
            self.effective_decimal_separator(),
            self.effective_thousands_separator(),
        )
    }
}

/// A resolved, validated locale. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    decimal_separator: char,
    thousands_separator: char,
}

impl Locale {
    /// Build a locale, validating its separators.
    pub fn new(
        language: impl Into<String>,
        decimal_separator: char,
        thousands_separator: char,
    ) -> Result<Self, ConfigError> {
        let language = language.into().trim().to_lowercase();
        if language.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "locale.language".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if decimal_separator == thousands_separator {
            return Err(ConfigError::ValidationFailed {
                field: "locale.decimal_separator".to_string(),
                message: "must differ from the thousands separator".to_string(),
            });
        }
        for (field, sep) in [
            ("locale.decimal_separator", decimal_separator),
            ("locale.thousands_separator", thousands_separator),
        ] {
            if sep.is_ascii_digit() || sep.is_alphabetic() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("'{sep}' cannot be used as a separator"),
                });
            }
        }
        Ok(Self {
            language,
            decimal_separator,
            thousands_separator,
        })
    }

    /// English with '.' decimals and ',' grouping.
    pub fn english() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn thousands_separator(&self) -> char {
        self.thousands_separator
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_to_english() {
        let locale = LocaleConfig::default().resolve().unwrap();
        assert_eq!(locale, Locale::english());
    }

    #[test]
    fn test_same_separators_rejected() {
        let err = Locale::new("en", ',', ',').unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }

    #[test]
    fn test_digit_separator_rejected() {
        let err = Locale::new("en", '.', '1').unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_language_is_normalized() {
        let locale = Locale::new(" EN ", '.', ',').unwrap();
        assert_eq!(locale.language(), "en");
    }
}
