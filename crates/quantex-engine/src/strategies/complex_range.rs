//! A number next to a bounding phrase: "nearly 300", "at least 3600",
//! "27 million or more", "less than 1". The phrase decides the range shape
//! and the number's scale decides its width.

use once_cell::sync::Lazy;
use quantex_core::Number;
use regex::{Captures, Regex};

use super::{Extraction, ExtractionContext, ExtractionStrategy, StrategyOutcome};
use crate::lexicon::{BoundKind, PhraseCategory};
use crate::scale::infer_scale;

static CITATION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").expect("valid regex"));
static SHORT_UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z]{1,3}\b").expect("valid regex"));

pub struct ComplexRangeStrategy;

impl ComplexRangeStrategy {
    pub fn new() -> Self {
        Self
    }

    fn extract(&self, text: &str, ctx: &ExtractionContext<'_>) -> Option<Extraction> {
        let factors = family_factors(text, ctx);
        for pattern in ctx.lexicon.bound_patterns() {
            for caps in pattern.regex.captures_iter(text) {
                let value = magnitude(&caps, "post", "post_scale", ctx)
                    .or_else(|| magnitude(&caps, "pre", "pre_scale", ctx));
                if let Some(value) = value {
                    tracing::trace!(phrase = %pattern.phrase, %value, "bounding phrase matched");
                    let (low, high) = bounds(pattern.kind, value, factors);
                    return Some(Extraction::range(low, high));
                }
            }
        }
        None
    }
}

impl Default for ComplexRangeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStrategy for ComplexRangeStrategy {
    fn name(&self) -> &'static str {
        "complex_range"
    }

    fn try_extract(&self, ctx: &ExtractionContext<'_>) -> StrategyOutcome {
        if let Some(extraction) = self.extract(ctx.text, ctx) {
            return StrategyOutcome::Matched(extraction);
        }
        let cleaned = strip_markers(ctx.text);
        if cleaned == ctx.text {
            return StrategyOutcome::NotApplicable;
        }
        self.extract(&cleaned, ctx).into()
    }
}

/// `(lower, upper)` multipliers: the family modifier when the text counts
/// families or households, otherwise `(1, 1)`.
pub(crate) fn family_factors(text: &str, ctx: &ExtractionContext<'_>) -> (Number, Number) {
    if ctx.lexicon.contains(PhraseCategory::FamilySynonym, text) {
        ctx.lexicon.lexicon().family().factors()
    } else {
        (Number::Int(1), Number::Int(1))
    }
}

fn magnitude(
    caps: &Captures<'_>,
    number: &str,
    scale: &str,
    ctx: &ExtractionContext<'_>,
) -> Option<Number> {
    let base = ctx.numbers.locale().parse(caps.name(number)?.as_str())?;
    let value = match caps.name(scale) {
        Some(word) => base * ctx.numbers.scale_value(word.as_str())?,
        None => base,
    };
    Some(value.normalized())
}

/// Range for `value` under a bounding phrase, scaled by `(lower, upper)` factors.
pub fn bounds(kind: BoundKind, value: Number, (lower, upper): (Number, Number)) -> (Number, Number) {
    let scale = infer_scale(value);
    let step = scale.step;
    let offset = |inclusive: bool| Number::Int(if inclusive { 0 } else { 1 });
    let (low, high) = match kind {
        BoundKind::Around => ((value - step).clamp_non_negative(), value + step),
        BoundKind::Above { inclusive } => {
            let inc = offset(inclusive);
            (value + inc, value + step + inc)
        }
        BoundKind::Below { inclusive } => {
            let inc = offset(inclusive);
            (
                (value - step - inc).clamp_non_negative(),
                (value - inc).clamp_non_negative(),
            )
        }
    };
    (
        (low * lower).round_to(scale.precision).normalized(),
        (high * upper).round_to(scale.precision).normalized(),
    )
}

/// Drop bracketed citation markers and isolated 1-3 letter uppercase tokens.
fn strip_markers(text: &str) -> String {
    let without_citations = CITATION_MARKER.replace_all(text, " ");
    let without_short = SHORT_UPPERCASE.replace_all(&without_citations, " ");
    without_short.split_whitespace().collect::<Vec<_>>().join(" ")
}
