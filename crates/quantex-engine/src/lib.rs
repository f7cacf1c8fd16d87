//! quantex-engine: turns disaster-impact mentions ("nearly 300 homes",
//! "$27 million or more", "a few thousand displaced") into a normalized
//! `(min, max, approximate)` range.
//!
//! Pipeline: preprocess -> annotate -> classify approximation -> strategy
//! chain (zero/unknown phrases, direct parse, shorthand scale, simple range,
//! complex range, quantifiers, entities, tokens) -> assemble.

pub mod annotate;
pub mod batch;
pub mod classify;
pub mod engine;
pub mod lexicon;
pub mod numbers;
pub mod scale;
pub mod strategies;
pub mod text;

pub use annotate::{Annotation, Annotator, EntityLabel, RuleAnnotator};
pub use batch::{BatchExtractor, BatchReport, BatchStats};
pub use classify::{ApproxReason, ApproxVerdict, ApproximationClassifier};
pub use engine::{QuantityEngine, QuantityEngineBuilder};
pub use lexicon::{CompiledLexicon, Lexicon, PhraseCategory};
pub use numbers::NumberParser;
pub use scale::{infer_scale, Scale};
pub use strategies::{Extraction, ExtractionContext, ExtractionStrategy, StrategyChain, StrategyOutcome};
