//! Vague quantities: "a dozen", "a few hundred", "dozens of thousands", "several".

use super::complex_range::family_factors;
use super::{Extraction, ExtractionContext, ExtractionStrategy, StrategyOutcome};

pub struct QuantifierStrategy;

impl ExtractionStrategy for QuantifierStrategy {
    fn name(&self) -> &'static str {
        "quantifier"
    }

    fn try_extract(&self, ctx: &ExtractionContext<'_>) -> StrategyOutcome {
        let Some(pattern) = ctx
            .lexicon
            .quantifier_patterns()
            .iter()
            .find(|p| p.regex.is_match(ctx.text))
        else {
            return StrategyOutcome::NotApplicable;
        };
        let (lower, upper) = family_factors(ctx.text, ctx);
        let (low, high) = pattern.entry.range();
        tracing::trace!(phrase = %pattern.entry.phrase, "quantifier matched");
        StrategyOutcome::Matched(Extraction::range(low * lower, high * upper))
    }
}
