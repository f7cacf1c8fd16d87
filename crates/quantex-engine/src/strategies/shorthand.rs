//! Digits followed by a magnitude word: "27 million", "2.5 billion", "5 lakh".

use super::{ExtractionContext, ExtractionStrategy, StrategyOutcome};

pub struct ShorthandScaleStrategy;

impl ExtractionStrategy for ShorthandScaleStrategy {
    fn name(&self) -> &'static str {
        "shorthand_scale"
    }

    fn try_extract(&self, ctx: &ExtractionContext<'_>) -> StrategyOutcome {
        StrategyOutcome::single(ctx.numbers.parse_shorthand(ctx.text))
    }
}
