//! The extraction strategy chain.
//!
//! Each strategy either matches and returns one or two numbers (or a
//! zero/unknown verdict), or reports that it does not apply. The chain tries
//! them in a fixed priority order and stops at the first match.

pub mod complex_range;
pub mod direct;
pub mod entity;
pub mod quantifier;
pub mod short_circuit;
pub mod shorthand;
pub mod simple_range;
pub mod token;

use quantex_core::Number;

use crate::annotate::{Annotation, EntityLabel};
use crate::lexicon::CompiledLexicon;
use crate::numbers::NumberParser;

pub use complex_range::ComplexRangeStrategy;
pub use direct::DirectParseStrategy;
pub use entity::EntityStrategy;
pub use quantifier::QuantifierStrategy;
pub use short_circuit::ShortCircuitStrategy;
pub use shorthand::ShorthandScaleStrategy;
pub use simple_range::SimpleRangeStrategy;
pub use token::TokenStrategy;

/// Everything a strategy may consult for one input.
pub struct ExtractionContext<'a> {
    /// Preprocessed text.
    pub text: &'a str,
    pub annotation: &'a Annotation,
    /// Entity labels the entity strategy considers.
    pub labels: &'a [EntityLabel],
    pub lexicon: &'a CompiledLexicon,
    pub numbers: &'a NumberParser,
}

/// What a matching strategy found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extraction {
    Zero,
    Unknown,
    /// One number. `approximate: None` defers to the classifier.
    Single {
        value: Number,
        approximate: Option<bool>,
    },
    /// Two numbers, in the order found.
    Pair {
        first: Number,
        second: Number,
        approximate: Option<bool>,
    },
}

impl Extraction {
    /// One or two values; anything else is not an extraction.
    pub fn from_values(values: &[Number], approximate: Option<bool>) -> Option<Self> {
        match *values {
            [value] => Some(Self::Single { value, approximate }),
            [first, second] => Some(Self::Pair {
                first,
                second,
                approximate,
            }),
            _ => None,
        }
    }

    pub fn range(low: Number, high: Number) -> Self {
        Self::Pair {
            first: low,
            second: high,
            approximate: Some(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrategyOutcome {
    Matched(Extraction),
    NotApplicable,
}

impl StrategyOutcome {
    pub fn from_values(values: &[Number], approximate: Option<bool>) -> Self {
        Extraction::from_values(values, approximate).map_or(Self::NotApplicable, Self::Matched)
    }

    pub fn single(value: Option<Number>) -> Self {
        value.map_or(Self::NotApplicable, |value| {
            Self::Matched(Extraction::Single {
                value,
                approximate: None,
            })
        })
    }
}

impl From<Option<Extraction>> for StrategyOutcome {
    fn from(extraction: Option<Extraction>) -> Self {
        extraction.map_or(Self::NotApplicable, Self::Matched)
    }
}

pub trait ExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn try_extract(&self, ctx: &ExtractionContext<'_>) -> StrategyOutcome;
}

/// Ordered strategies; the first match wins.
pub struct StrategyChain {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl StrategyChain {
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Short-circuit phrases, direct parse, shorthand scale, simple range,
    /// complex range, quantifiers, entities, tokens.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(ShortCircuitStrategy),
            Box::new(DirectParseStrategy),
            Box::new(ShorthandScaleStrategy),
            Box::new(SimpleRangeStrategy::new()),
            Box::new(ComplexRangeStrategy::new()),
            Box::new(QuantifierStrategy),
            Box::new(EntityStrategy),
            Box::new(TokenStrategy),
        ])
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// The first matching strategy's name and extraction.
    pub fn run(&self, ctx: &ExtractionContext<'_>) -> Option<(&'static str, Extraction)> {
        self.strategies.iter().find_map(|strategy| {
            match strategy.try_extract(ctx) {
                StrategyOutcome::Matched(extraction) => Some((strategy.name(), extraction)),
                StrategyOutcome::NotApplicable => {
                    tracing::trace!(strategy = strategy.name(), "not applicable");
                    None
                }
            }
        })
    }
}

impl Default for StrategyChain {
    fn default() -> Self {
        Self::standard()
    }
}
