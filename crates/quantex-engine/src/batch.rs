//! Parallel extraction over many inputs on a dedicated rayon pool.

use std::sync::Arc;
use std::time::Instant;

use quantex_core::config::BatchConfig;
use quantex_core::errors::EngineError;
use quantex_core::{Outcome, QuantityResult};
use rayon::prelude::*;
use serde::Serialize;

use crate::annotate::EntityLabel;
use crate::engine::QuantityEngine;

/// Outcome counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub total: usize,
    pub success: usize,
    pub zero: usize,
    pub unknown: usize,
    pub failure: usize,
    pub duration_ms: u64,
}

impl BatchStats {
    fn tally(results: &[QuantityResult], duration_ms: u64) -> Self {
        let mut stats = Self {
            total: results.len(),
            duration_ms,
            ..Self::default()
        };
        for result in results {
            match result.outcome {
                Outcome::Success => stats.success += 1,
                Outcome::RecognizedZero => stats.zero += 1,
                Outcome::RecognizedUnknown => stats.unknown += 1,
                Outcome::ParseFailure => stats.failure += 1,
            }
        }
        stats
    }
}

/// Results in input order, plus their counts.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub results: Vec<QuantityResult>,
    pub stats: BatchStats,
}

pub struct BatchExtractor {
    engine: Arc<QuantityEngine>,
    pool: rayon::ThreadPool,
    chunk_size: usize,
    labels: Vec<EntityLabel>,
}

impl BatchExtractor {
    pub fn new(engine: Arc<QuantityEngine>, config: &BatchConfig) -> Result<Self, EngineError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.effective_threads())
            .thread_name(|i| format!("quantex-batch-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
        Ok(Self {
            engine,
            pool,
            chunk_size: config.effective_chunk_size().max(1),
            labels: EntityLabel::DEFAULT_NUMERIC.to_vec(),
        })
    }

    /// Entity labels passed to every extraction.
    pub fn with_labels(mut self, labels: &[EntityLabel]) -> Self {
        self.labels = labels.to_vec();
        self
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn engine(&self) -> &QuantityEngine {
        &self.engine
    }

    pub fn extract_all<S>(&self, inputs: &[S]) -> BatchReport
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let results: Vec<QuantityResult> = self.pool.install(|| {
            inputs
                .par_iter()
                .with_min_len(self.chunk_size)
                .map(|input| self.engine.extract_numbers(input.as_ref(), &self.labels))
                .collect()
        });
        let stats = BatchStats::tally(&results, start.elapsed().as_millis() as u64);
        tracing::info!(
            total = stats.total,
            success = stats.success,
            zero = stats.zero,
            unknown = stats.unknown,
            failure = stats.failure,
            duration_ms = stats.duration_ms,
            threads = self.threads(),
            "batch extraction complete"
        );
        BatchReport { results, stats }
    }
}
