//! The whole text is a number: digits under the locale, or number words.

use super::{ExtractionContext, ExtractionStrategy, StrategyOutcome};

pub struct DirectParseStrategy;

impl ExtractionStrategy for DirectParseStrategy {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn try_extract(&self, ctx: &ExtractionContext<'_>) -> StrategyOutcome {
        StrategyOutcome::single(ctx.numbers.parse_direct(ctx.text))
    }
}
