//! Tests for the quantex error handling system.

use std::collections::HashSet;

use quantex_core::errors::*;

/// Every error enum reports a non-empty code.
#[test]
fn test_all_errors_have_error_code() {
    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    assert!(!config.error_code().is_empty());

    let lexicon = LexiconError::EmptyCategory { category: "zero".into() };
    assert!(!lexicon.error_code().is_empty());

    let annotator = AnnotatorError::LoadTimeout { timeout_ms: 10 };
    assert!(!annotator.error_code().is_empty());

    let engine = EngineError::ThreadPool("boom".into());
    assert!(!engine.error_code().is_empty());
}

/// Sub-errors convert into EngineError and keep their codes.
#[test]
fn test_from_conversions_preserve_codes() {
    let lexicon = LexiconError::PatternCompilation {
        phrase: "(".into(),
        message: "unclosed group".into(),
    };
    let code = lexicon.error_code();
    let engine: EngineError = lexicon.into();
    assert!(matches!(engine, EngineError::Lexicon(_)));
    assert_eq!(engine.error_code(), code);

    let annotator = AnnotatorError::LoadFailed("missing model".into());
    let engine: EngineError = annotator.into();
    assert_eq!(engine.error_code(), "ANNOTATOR_ERROR");

    let config = ConfigError::InvalidValue {
        field: "locale.language".into(),
        message: "bad".into(),
    };
    let engine: EngineError = config.into();
    assert_eq!(engine.error_code(), "CONFIG_ERROR");
}

/// Codes distinguish the failure kinds callers care about.
#[test]
fn test_distinct_codes() {
    let codes: HashSet<&str> = [
        ConfigError::FileNotFound { path: "x".into() }.error_code(),
        LexiconError::EmptyCategory { category: "x".into() }.error_code(),
        LexiconError::PatternCompilation { phrase: "x".into(), message: "y".into() }.error_code(),
        AnnotatorError::LoadFailed("x".into()).error_code(),
        AnnotatorError::LoadTimeout { timeout_ms: 1 }.error_code(),
        EngineError::UnsupportedLanguage { language: "xx".into() }.error_code(),
        EngineError::ThreadPool("x".into()).error_code(),
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 7);
}

/// coded_string() prefixes the code.
#[test]
fn test_coded_string_format() {
    let err = EngineError::UnsupportedLanguage { language: "fr".into() };
    assert_eq!(err.coded_string(), "[UNSUPPORTED_LANGUAGE] Unsupported language: fr");
}
