//! Configuration system for quantex.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod batch_config;
pub mod lexicon_config;
pub mod locale_config;
pub mod quantex_config;

pub use batch_config::BatchConfig;
pub use lexicon_config::LexiconConfig;
pub use locale_config::{Locale, LocaleConfig};
pub use quantex_config::{ConfigOverrides, QuantexConfig};
