//! Linguistic annotator errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while loading a linguistic annotator.
#[derive(Debug, thiserror::Error)]
pub enum AnnotatorError {
    #[error("Annotator failed to load: {0}")]
    LoadFailed(String),

    #[error("Annotator load timed out after {timeout_ms}ms")]
    LoadTimeout { timeout_ms: u64 },
}

impl ErrorCode for AnnotatorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LoadFailed(_) => error_code::ANNOTATOR_ERROR,
            Self::LoadTimeout { .. } => error_code::ANNOTATOR_TIMEOUT,
        }
    }
}
