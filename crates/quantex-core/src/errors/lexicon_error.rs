//! Lexicon loading errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while loading or compiling a phrase lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("Lexicon parse error in {source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("Lexicon category '{category}' is empty")]
    EmptyCategory { category: String },

    #[error("Invalid quantifier '{phrase}': {message}")]
    InvalidQuantifier { phrase: String, message: String },

    #[error("Pattern for '{phrase}' failed to compile: {message}")]
    PatternCompilation { phrase: String, message: String },
}

impl ErrorCode for LexiconError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PatternCompilation { .. } => error_code::PATTERN_ERROR,
            _ => error_code::LEXICON_ERROR,
        }
    }
}
