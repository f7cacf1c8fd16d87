//! Tests for the quantex configuration system.

use std::sync::Mutex;

use quantex_core::config::{ConfigOverrides, Locale, QuantexConfig};
use quantex_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all QUANTEX_ env vars to prevent cross-test contamination.
fn clear_quantex_env_vars() {
    for key in [
        "QUANTEX_LOCALE_LANGUAGE",
        "QUANTEX_DECIMAL_SEPARATOR",
        "QUANTEX_THOUSANDS_SEPARATOR",
        "QUANTEX_LEXICON_PATH",
        "QUANTEX_BATCH_THREADS",
    ] {
        std::env::remove_var(key);
    }
}

/// Overrides beat env, env beats the project file.
#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quantex_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("quantex.toml"),
        r#"
[locale]
decimal_separator = ","
thousands_separator = "."

[batch]
threads = 2
chunk_size = 64
"#,
    )
    .unwrap();

    std::env::set_var("QUANTEX_BATCH_THREADS", "8");

    let overrides = ConfigOverrides {
        batch_threads: Some(16),
        ..Default::default()
    };
    let config = QuantexConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.batch.effective_threads(), 16);
    assert_eq!(config.batch.effective_chunk_size(), 64);
    assert_eq!(config.locale.effective_decimal_separator(), ',');
    assert_eq!(config.locale.effective_thousands_separator(), '.');

    clear_quantex_env_vars();
}

/// No project file: compiled defaults.
#[test]
fn test_load_missing_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quantex_env_vars();

    let dir = tempdir();
    let config = QuantexConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.locale.resolve().unwrap(), Locale::english());
    assert_eq!(config.batch.effective_threads(), 0);
    assert_eq!(config.batch.effective_chunk_size(), 256);
    assert!(config.lexicon.path.is_none());
}

/// Env var separators must be a single character.
#[test]
fn test_env_separator_must_be_single_char() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quantex_env_vars();

    let dir = tempdir();
    std::env::set_var("QUANTEX_DECIMAL_SEPARATOR", "..");
    let result = QuantexConfig::load(dir.path(), None);
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

    clear_quantex_env_vars();
}

/// A non-numeric env thread count is rejected rather than ignored.
#[test]
fn test_env_batch_threads_must_be_numeric() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quantex_env_vars();

    let dir = tempdir();
    std::env::set_var("QUANTEX_BATCH_THREADS", "eight");
    let result = QuantexConfig::load(dir.path(), None);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref field, .. }) if field == "QUANTEX_BATCH_THREADS"
    ));

    clear_quantex_env_vars();
}

/// Env var language override is picked up.
#[test]
fn test_env_language_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quantex_env_vars();

    let dir = tempdir();
    std::env::set_var("QUANTEX_LOCALE_LANGUAGE", "EN");
    let config = QuantexConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.locale.resolve().unwrap().language(), "en");

    clear_quantex_env_vars();
}

/// Invalid TOML syntax returns ParseError.
#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quantex_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("quantex.toml"), "this is not valid toml {{{{").unwrap();

    match QuantexConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

/// Identical separators fail validation after all layers merge.
#[test]
fn test_conflicting_separators_fail_validation() {
    let result = QuantexConfig::from_toml(
        r#"
[locale]
decimal_separator = ","
"#,
    )
    .and_then(|c| QuantexConfig::validate(&c).map(|_| c));
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

/// Zero chunk size is rejected.
#[test]
fn test_zero_chunk_size_rejected() {
    let config = QuantexConfig::from_toml("[batch]\nchunk_size = 0\n").unwrap();
    assert!(matches!(
        QuantexConfig::validate(&config),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

/// Unknown keys are ignored.
#[test]
fn test_unknown_keys_ignored() {
    let config = QuantexConfig::from_toml(
        r#"
[locale]
language = "en"
dialect = "british"

[experimental]
flag = true
"#,
    )
    .unwrap();
    assert_eq!(config.locale.effective_language(), "en");
}

/// to_toml output parses back into an equivalent config.
#[test]
fn test_toml_roundtrip() {
    let mut config = QuantexConfig::default();
    config.locale.thousands_separator = Some(' ');
    config.batch.threads = Some(4);

    let text = config.to_toml().unwrap();
    let parsed = QuantexConfig::from_toml(&text).unwrap();
    assert_eq!(parsed.locale.effective_thousands_separator(), ' ');
    assert_eq!(parsed.batch.effective_threads(), 4);
}
