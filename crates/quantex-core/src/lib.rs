//! quantex-core: shared foundation for the quantex extraction engine.
//!
//! - Types: `Number`, `QuantityResult`, `QuantityInput`
//! - Errors: one `thiserror` enum per subsystem, each with a stable code
//! - Config: TOML-based, layered resolution (overrides > env > project > defaults)
//! - Tracing: `tracing` + `EnvFilter`, driven by `QUANTEX_LOG`

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{BatchConfig, LexiconConfig, LocaleConfig, QuantexConfig};
pub use errors::{AnnotatorError, ConfigError, EngineError, ErrorCode, LexiconError};
pub use types::{Number, Outcome, QuantityInput, QuantityResult};
