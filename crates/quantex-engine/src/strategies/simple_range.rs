//! Two numbers joined by a separator: "110-352", "5 and 10", "20 to 30".

use once_cell::sync::Lazy;
use quantex_core::Number;
use regex::Regex;

use super::{Extraction, ExtractionContext, ExtractionStrategy, StrategyOutcome};
use crate::lexicon::PhraseCategory;

static AND_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\band\b").expect("valid regex"));
static TO_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bto\b").expect("valid regex"));

const DASHES: &[char] = &['-', '–', '—'];

/// Cue phrases stripped from the front of each side before parsing.
const CUE_CATEGORIES: [PhraseCategory; 6] = [
    PhraseCategory::Approximately,
    PhraseCategory::OverInclusive,
    PhraseCategory::UnderInclusive,
    PhraseCategory::Over,
    PhraseCategory::Under,
    PhraseCategory::Exactly,
];

/// Words that open a range without changing it.
const RANGE_LEADS: &[&str] = &["between", "from"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    Dash,
    And,
    To,
    Ampersand,
}

pub struct SimpleRangeStrategy {
    separators: [Separator; 4],
}

impl SimpleRangeStrategy {
    pub fn new() -> Self {
        Self {
            separators: [Separator::Dash, Separator::And, Separator::To, Separator::Ampersand],
        }
    }

    /// Split on the first separator kind present in the text.
    fn split<'t>(&self, text: &'t str, ctx: &ExtractionContext<'_>) -> Option<(&'t str, &'t str)> {
        self.separators.iter().find_map(|separator| {
            let (start, end) = match separator {
                Separator::Dash => dash_position(text, ctx)?,
                Separator::And => AND_SEPARATOR.find(text).map(|m| (m.start(), m.end()))?,
                Separator::To => TO_SEPARATOR.find(text).map(|m| (m.start(), m.end()))?,
                Separator::Ampersand => text.find('&').map(|i| (i, i + 1))?,
            };
            Some((&text[..start], &text[end..]))
        })
    }

    fn parse_side(&self, side: &str, ctx: &ExtractionContext<'_>) -> Option<Number> {
        let side = strip_leading_cues(side, ctx);
        let thousands = ctx.numbers.locale().locale().thousands_separator();
        ctx.numbers
            .parse(side)
            .or_else(|| ctx.numbers.parse(&side.replace(thousands, "")))
    }
}

impl Default for SimpleRangeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStrategy for SimpleRangeStrategy {
    fn name(&self) -> &'static str {
        "simple_range"
    }

    fn try_extract(&self, ctx: &ExtractionContext<'_>) -> StrategyOutcome {
        let Some((left, right)) = self.split(ctx.text, ctx) else {
            return StrategyOutcome::NotApplicable;
        };
        match (self.parse_side(left, ctx), self.parse_side(right, ctx)) {
            (Some(low), Some(high)) => StrategyOutcome::Matched(Extraction::range(low, high)),
            _ => StrategyOutcome::NotApplicable,
        }
    }
}

/// First dash that is not the hyphen of a spelled compound like "fifty-two".
fn dash_position(text: &str, ctx: &ExtractionContext<'_>) -> Option<(usize, usize)> {
    text.char_indices()
        .filter(|(_, c)| DASHES.contains(c))
        .find(|&(i, c)| {
            let before = trailing_word(&text[..i]);
            let after = leading_word(&text[i + c.len_utf8()..]);
            before.is_empty()
                || after.is_empty()
                || ctx
                    .numbers
                    .words()
                    .parse(&format!("{before}-{after}"), false)
                    .is_none()
        })
        .map(|(i, c)| (i, i + c.len_utf8()))
}

fn trailing_word(text: &str) -> &str {
    let start = text
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphabetic())
        .last()
        .map_or(text.len(), |(i, _)| i);
    &text[start..]
}

fn leading_word(text: &str) -> &str {
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map_or(text.len(), |(i, _)| i);
    &text[..end]
}

fn strip_leading_cues<'t>(side: &'t str, ctx: &ExtractionContext<'_>) -> &'t str {
    let mut side = side.trim();
    'strip: loop {
        for category in CUE_CATEGORIES {
            if let Some(found) = ctx.lexicon.matcher(category).find(side) {
                if found.start == 0 {
                    side = side[found.end..].trim_start();
                    continue 'strip;
                }
            }
        }
        for lead in RANGE_LEADS {
            let lead_len = lead.len();
            let is_lead = side.len() > lead_len
                && side.is_char_boundary(lead_len)
                && side[..lead_len].eq_ignore_ascii_case(lead)
                && side[lead_len..].starts_with(char::is_whitespace);
            if is_lead {
                side = side[lead_len..].trim_start();
                continue 'strip;
            }
        }
        return side;
    }
}
