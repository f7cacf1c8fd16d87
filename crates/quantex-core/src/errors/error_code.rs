//! ErrorCode trait for stable, machine-readable error identifiers.

/// Every error enum implements this to expose a stable code string
/// that callers (batch drivers, bindings) can match on.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LEXICON_ERROR: &str = "LEXICON_ERROR";
pub const PATTERN_ERROR: &str = "PATTERN_ERROR";
pub const ANNOTATOR_ERROR: &str = "ANNOTATOR_ERROR";
pub const ANNOTATOR_TIMEOUT: &str = "ANNOTATOR_TIMEOUT";
pub const UNSUPPORTED_LANGUAGE: &str = "UNSUPPORTED_LANGUAGE";
pub const THREAD_POOL_ERROR: &str = "THREAD_POOL_ERROR";
