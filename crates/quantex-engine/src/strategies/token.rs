//! Last resort: runs of numeral tokens. Two runs read as an implicit range.

use quantex_core::Number;
use smallvec::SmallVec;

use super::{ExtractionContext, ExtractionStrategy, StrategyOutcome};
use crate::annotate::{Annotation, PosTag};

pub struct TokenStrategy;

impl ExtractionStrategy for TokenStrategy {
    fn name(&self) -> &'static str {
        "token"
    }

    fn try_extract(&self, ctx: &ExtractionContext<'_>) -> StrategyOutcome {
        let runs = numeral_runs(ctx.annotation);
        let mut values: SmallVec<[Number; 2]> = SmallVec::new();
        for run in &runs {
            match ctx.numbers.parse(run) {
                Some(value) => values.push(value),
                None => return StrategyOutcome::NotApplicable,
            }
        }
        let approximate = (values.len() == 2).then_some(true);
        StrategyOutcome::from_values(&values, approximate)
    }
}

/// Consecutive numeral tokens joined with their original whitespace.
pub fn numeral_runs(annotation: &Annotation) -> SmallVec<[String; 2]> {
    let tokens = &annotation.tokens;
    let mut runs = SmallVec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].pos != PosTag::Numeral {
            i += 1;
            continue;
        }
        let start = i;
        while i < tokens.len() && tokens[i].pos == PosTag::Numeral {
            i += 1;
        }
        runs.push(annotation.span_text(start, i));
    }
    runs
}
