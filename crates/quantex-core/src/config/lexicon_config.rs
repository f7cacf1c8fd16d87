//! Lexicon source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the phrase lexicon comes from.
///
/// With no `path`, the built-in table for the configured language is used.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexiconConfig {
    /// Path to a TOML phrase table replacing the built-in one.
    pub path: Option<PathBuf>,
}
