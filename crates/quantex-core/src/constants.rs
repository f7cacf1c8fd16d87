//! Shared constants for the quantex engine.

/// quantex version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default language for spelled-out number handling.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default decimal separator.
pub const DEFAULT_DECIMAL_SEPARATOR: char = '.';

/// Default thousands separator.
pub const DEFAULT_THOUSANDS_SEPARATOR: char = ',';

/// Default batch worker threads (0 = rayon default).
pub const DEFAULT_BATCH_THREADS: usize = 0;

/// Default batch chunk size hint.
pub const DEFAULT_BATCH_CHUNK_SIZE: usize = 256;

/// Project config file name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "quantex.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "QUANTEX_LOG";

/// Fallback tracing filter when `QUANTEX_LOG` is absent or invalid.
pub const DEFAULT_LOG_FILTER: &str = "quantex=info";

/// Lower multiplier applied when a phrase counts families or households.
pub const DEFAULT_FAMILY_LOWER: i64 = 3;

/// Upper multiplier applied when a phrase counts families or households.
pub const DEFAULT_FAMILY_UPPER: i64 = 5;
