//! Error handling for quantex.
//! One error enum per subsystem, `thiserror` only.
//!
//! Errors only arise while building an engine (config, lexicon, annotator,
//! thread pool). Extraction never fails; it reports `Outcome::ParseFailure`.

pub mod annotator_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod lexicon_error;

pub use annotator_error::AnnotatorError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::ErrorCode;
pub use lexicon_error::LexiconError;
