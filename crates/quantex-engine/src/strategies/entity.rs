//! Numbers from recognized entities. Money amounts go through the token
//! strategy, since they mix digits and words ("20 million dollars").

use quantex_core::Number;
use smallvec::SmallVec;

use super::token::TokenStrategy;
use super::{ExtractionContext, ExtractionStrategy, StrategyOutcome};
use crate::annotate::EntityLabel;

pub struct EntityStrategy;

impl ExtractionStrategy for EntityStrategy {
    fn name(&self) -> &'static str {
        "entity"
    }

    fn try_extract(&self, ctx: &ExtractionContext<'_>) -> StrategyOutcome {
        let spans: SmallVec<[_; 2]> = ctx.annotation.entities_with(ctx.labels).collect();
        if spans.is_empty() {
            return StrategyOutcome::NotApplicable;
        }
        if spans.iter().any(|span| span.label == EntityLabel::Money) {
            return TokenStrategy.try_extract(ctx);
        }
        let mut values: SmallVec<[Number; 2]> = SmallVec::new();
        for span in spans {
            match ctx.numbers.parse(&span.text) {
                Some(value) => values.push(value),
                None => return StrategyOutcome::NotApplicable,
            }
        }
        StrategyOutcome::from_values(&values, None)
    }
}
