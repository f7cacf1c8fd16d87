//! Tests for custom lexicons and config-driven engine construction.

use std::sync::Mutex;

use quantex_core::config::{Locale, QuantexConfig};
use quantex_core::{ErrorCode, Number, Outcome};
use quantex_engine::{Lexicon, PhraseCategory, QuantityEngine};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const BUILTIN_EN: &str = include_str!("../lexicon/en.toml");

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

/// The built-in lexicon with one extra zero phrase.
fn extended_lexicon() -> String {
    BUILTIN_EN.replacen("zero = [", "zero = [\n    \"all safe\",", 1)
}

/// The built-in table loads and every category is populated.
#[test]
fn test_builtin_lexicon_is_complete() {
    let lexicon = Lexicon::builtin("en").unwrap();
    assert_eq!(lexicon.language(), "en");
    for category in PhraseCategory::ALL {
        assert!(!lexicon.phrases(category).is_empty(), "{} is empty", category.name());
    }
    assert_eq!(lexicon.scale_value("million"), Some(1_000_000));
    assert_eq!(lexicon.scale_value("lakh"), Some(100_000));
    assert!(!lexicon.quantifiers().is_empty());
}

/// Only English ships built in.
#[test]
fn test_builtin_unknown_language() {
    let err = Lexicon::builtin("de").unwrap_err();
    assert_eq!(err.error_code(), "UNSUPPORTED_LANGUAGE");
}

/// A phrase added to a custom file takes effect without code changes.
#[test]
fn test_custom_lexicon_phrase() {
    let builtin = QuantityEngine::new(Locale::english()).unwrap();
    assert_eq!(builtin.extract("all safe").outcome, Outcome::ParseFailure);

    let lexicon = Lexicon::from_toml_str(&extended_lexicon(), "extended.toml").unwrap();
    let engine = QuantityEngine::builder()
        .locale(Locale::english())
        .lexicon(lexicon)
        .build()
        .unwrap();
    assert_eq!(engine.extract("all safe").outcome, Outcome::RecognizedZero);
}

/// Malformed lexicon files are reported with the file name.
#[test]
fn test_malformed_lexicon() {
    let err = Lexicon::from_toml_str("version = \"one\"", "broken.toml").unwrap_err();
    assert_eq!(err.error_code(), "LEXICON_ERROR");
    assert!(err.to_string().contains("broken.toml"));

    let start = BUILTIN_EN.find("zero = [").unwrap();
    let end = start + BUILTIN_EN[start..].find(']').unwrap();
    let empty_zero = format!("{}zero = [{}", &BUILTIN_EN[..start], &BUILTIN_EN[end..]);
    let err = Lexicon::from_toml_str(&empty_zero, "empty.toml").unwrap_err();
    assert!(err.to_string().contains("'zero' is empty"));
}

/// A lexicon for another language cannot be paired with an English locale.
#[test]
fn test_lexicon_language_mismatch() {
    let french = BUILTIN_EN.replacen("language = \"en\"", "language = \"fr\"", 1);
    let lexicon = Lexicon::from_toml_str(&french, "fr.toml").unwrap();
    let err = QuantityEngine::builder()
        .locale(Locale::english())
        .lexicon(lexicon)
        .build()
        .unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

/// `quantex.toml` selects the separators and a lexicon file.
#[test]
fn test_engine_from_project_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quantex_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let lexicon_path = dir.path().join("custom.toml");
    std::fs::write(&lexicon_path, extended_lexicon()).unwrap();
    std::fs::write(
        dir.path().join("quantex.toml"),
        format!(
            r#"
[locale]
decimal_separator = ","
thousands_separator = "."

[lexicon]
path = {:?}
"#,
            lexicon_path.display().to_string()
        ),
    )
    .unwrap();

    let config = QuantexConfig::load(dir.path(), None).unwrap();
    let engine = QuantityEngine::from_config(&config).unwrap();

    assert_eq!(engine.locale().decimal_separator(), ',');
    assert_eq!(
        engine.extract("3.600").as_tuple(),
        (Some(Number::Int(3600)), Some(Number::Int(3600)), Some(false))
    );
    assert_eq!(engine.extract("all safe").outcome, Outcome::RecognizedZero);
}

/// A configured lexicon path that does not exist fails engine construction.
#[test]
fn test_missing_lexicon_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut config = QuantexConfig::default();
    config.lexicon.path = Some(dir.path().join("missing.toml"));
    let err = QuantityEngine::from_config(&config).unwrap_err();
    assert_eq!(err.error_code(), "LEXICON_ERROR");
}
