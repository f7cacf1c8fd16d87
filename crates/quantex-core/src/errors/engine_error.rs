//! Engine construction errors.

use super::error_code::{self, ErrorCode};
use super::{AnnotatorError, ConfigError, LexiconError};

/// Errors that can occur while building an engine.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("Annotator error: {0}")]
    Annotator(#[from] AnnotatorError),

    #[error("Unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl ErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Lexicon(e) => e.error_code(),
            Self::Annotator(e) => e.error_code(),
            Self::UnsupportedLanguage { .. } => error_code::UNSUPPORTED_LANGUAGE,
            Self::ThreadPool(_) => error_code::THREAD_POOL_ERROR,
        }
    }
}
