//! Zero and unknown phrases end extraction before any number parsing.

use super::{Extraction, ExtractionContext, ExtractionStrategy, StrategyOutcome};
use crate::lexicon::PhraseCategory;

pub struct ShortCircuitStrategy;

impl ExtractionStrategy for ShortCircuitStrategy {
    fn name(&self) -> &'static str {
        "short_circuit"
    }

    fn try_extract(&self, ctx: &ExtractionContext<'_>) -> StrategyOutcome {
        if ctx.lexicon.contains(PhraseCategory::Zero, ctx.text) {
            StrategyOutcome::Matched(Extraction::Zero)
        } else if ctx.lexicon.contains(PhraseCategory::Unknown, ctx.text) {
            StrategyOutcome::Matched(Extraction::Unknown)
        } else {
            StrategyOutcome::NotApplicable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::test_support::Fixture;

    #[test]
    fn test_zero_phrases() {
        for text in ["none reported", "No deaths", "zero", "nobody was hurt"] {
            assert_eq!(
                Fixture::new(text).run(&ShortCircuitStrategy),
                StrategyOutcome::Matched(Extraction::Zero),
                "{text}"
            );
        }
    }

    #[test]
    fn test_unknown_phrases() {
        for text in ["unknown!", "Not reported", "damage was negligible", "n/a"] {
            assert_eq!(
                Fixture::new(text).run(&ShortCircuitStrategy),
                StrategyOutcome::Matched(Extraction::Unknown),
                "{text}"
            );
        }
    }

    #[test]
    fn test_bare_no_is_not_zero() {
        assert_eq!(
            Fixture::new("no more than 5").run(&ShortCircuitStrategy),
            StrategyOutcome::NotApplicable
        );
        assert_eq!(
            Fixture::new("300 homes").run(&ShortCircuitStrategy),
            StrategyOutcome::NotApplicable
        );
    }
}
