//! Batch extraction configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BATCH_CHUNK_SIZE, DEFAULT_BATCH_THREADS};

/// Configuration for parallel batch extraction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatchConfig {
    /// Worker threads for batch extraction. 0 = rayon default.
    pub threads: Option<usize>,
    /// Minimum inputs handed to one worker at a time. Default: 256.
    pub chunk_size: Option<usize>,
}

impl BatchConfig {
    /// Returns the effective thread count, defaulting to 0 (auto).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_BATCH_THREADS)
    }

    /// Returns the effective chunk size, defaulting to 256.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_BATCH_CHUNK_SIZE)
    }
}
