//! Linguistic annotation: tokens, part-of-speech tags, numeric entities.
//!
//! The extraction strategies only see the [`Annotator`] trait; the rule-based
//! English implementation is the default.

pub mod ner;
pub mod rule_based;
pub mod tagger;
pub mod tokenizer;
pub mod types;

pub use rule_based::{load_with_timeout, RuleAnnotator};
pub use types::{Annotation, Annotator, EntityLabel, EntitySpan, PosTag, Token};
