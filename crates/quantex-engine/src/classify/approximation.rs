//! Decides whether an extracted quantity is an estimate, from lexical cues,
//! part-of-speech patterns, and recognized entities. First matching rule wins.

use crate::annotate::{Annotation, EntityLabel, PosTag};
use crate::lexicon::{CompiledLexicon, PhraseCategory};
use crate::text::currency::{is_currency_symbol, is_currency_word};
use crate::text::LocaleNumberParser;

/// Characters that mark a number as bounded or approximate wherever they appear.
const APPROXIMATE_MARKERS: &[char] = &[':', '+', '±', '<', '>', '=', '≤', '≥', '~', '≈'];

/// Which rule produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproxReason {
    /// The text is just a number.
    BareNumber,
    /// An "exactly" phrase.
    ExactCue,
    /// An approximately/over/under phrase.
    BoundingCue,
    /// A symbol tag, an approximate tag pattern, or a marker character.
    SymbolOrPattern,
    /// Every token is a numeral or a currency marker.
    AllNumeric,
    /// Adverb followed by a number; exact only when the entity covers the number.
    AdverbNumber,
    /// No entities, or a numeric entity was recognized.
    NumericEntities,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproxVerdict {
    pub approximate: bool,
    pub reason: ApproxReason,
}

impl ApproxVerdict {
    fn new(approximate: bool, reason: ApproxReason) -> Self {
        Self { approximate, reason }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximationClassifier;

impl ApproximationClassifier {
    pub fn classify(
        &self,
        text: &str,
        annotation: &Annotation,
        lexicon: &CompiledLexicon,
        locale: &LocaleNumberParser,
    ) -> ApproxVerdict {
        if locale.parse(text).is_some() {
            return ApproxVerdict::new(false, ApproxReason::BareNumber);
        }
        if lexicon.contains(PhraseCategory::Exactly, text) {
            return ApproxVerdict::new(false, ApproxReason::ExactCue);
        }
        if PhraseCategory::BOUNDING
            .iter()
            .any(|category| lexicon.contains(*category, text))
        {
            return ApproxVerdict::new(true, ApproxReason::BoundingCue);
        }

        let tags = annotation.tags();
        if has_approximate_pattern(&tags) || text.contains(APPROXIMATE_MARKERS) {
            return ApproxVerdict::new(true, ApproxReason::SymbolOrPattern);
        }

        let all_numeric = annotation.tokens.iter().all(|t| {
            t.pos == PosTag::Numeral
                || t.like_num
                || t.text.chars().all(is_currency_symbol)
                || is_currency_word(&t.text)
        });
        if all_numeric {
            return ApproxVerdict::new(false, ApproxReason::AllNumeric);
        }

        if tags == [PosTag::Adverb, PosTag::Numeral] {
            let number = &annotation.tokens[1];
            let covered = annotation
                .entities
                .iter()
                .any(|e| e.start == number.start && e.end == number.end);
            return ApproxVerdict::new(!covered, ApproxReason::AdverbNumber);
        }

        if annotation.entities.is_empty()
            || annotation
                .entities
                .iter()
                .any(|e| EntityLabel::DEFAULT_NUMERIC.contains(&e.label))
        {
            return ApproxVerdict::new(false, ApproxReason::NumericEntities);
        }

        ApproxVerdict::new(false, ApproxReason::Default)
    }
}

/// Symbol tags, or adverb+superlative+number, adverb+number+noun,
/// adposition+number+noun anywhere in the sequence.
fn has_approximate_pattern(tags: &[PosTag]) -> bool {
    use PosTag::*;
    tags.contains(&Symbol)
        || tags.windows(3).any(|w| {
            matches!(
                w,
                [Adverb, Superlative, Numeral] | [Adverb, Numeral, Noun] | [Adposition, Numeral, Noun]
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{Annotator, EntitySpan, RuleAnnotator};
    use crate::lexicon::Lexicon;
    use quantex_core::config::Locale;

    fn classify(text: &str) -> ApproxVerdict {
        let lexicon = CompiledLexicon::new(Lexicon::builtin("en").unwrap()).unwrap();
        let locale = LocaleNumberParser::new(Locale::english());
        let annotation = RuleAnnotator.annotate(text);
        ApproximationClassifier.classify(text, &annotation, &lexicon, &locale)
    }

    #[test]
    fn test_bare_numbers_are_exact() {
        assert_eq!(classify("3,600"), ApproxVerdict::new(false, ApproxReason::BareNumber));
    }

    #[test]
    fn test_exact_cue_beats_bounding_cue() {
        assert_eq!(classify("exactly 40, not more than that").reason, ApproxReason::ExactCue);
    }

    #[test]
    fn test_bounding_cues_are_approximate() {
        assert_eq!(classify("nearly 300 homes"), ApproxVerdict::new(true, ApproxReason::BoundingCue));
        assert!(classify("~45").approximate);
        assert!(classify("at least 12").approximate);
    }

    #[test]
    fn test_tag_patterns_and_markers() {
        assert_eq!(
            classify("reportedly 40 homes"),
            ApproxVerdict::new(true, ApproxReason::SymbolOrPattern)
        );
        assert_eq!(
            classify("in 40 homes"),
            ApproxVerdict::new(true, ApproxReason::SymbolOrPattern)
        );
        assert_eq!(classify("deaths: 40").reason, ApproxReason::SymbolOrPattern);
    }

    #[test]
    fn test_numeric_only_text_is_exact() {
        assert_eq!(classify("27 million"), ApproxVerdict::new(false, ApproxReason::AllNumeric));
        assert_eq!(classify("twenty three"), ApproxVerdict::new(false, ApproxReason::AllNumeric));
    }

    #[test]
    fn test_adverb_number_depends_on_entity_coverage() {
        assert_eq!(classify("reportedly 40"), ApproxVerdict::new(false, ApproxReason::AdverbNumber));
    }

    #[test]
    fn test_adverb_number_with_wider_entity_is_approximate() {
        let text = "reportedly 40";
        let lexicon = CompiledLexicon::new(Lexicon::builtin("en").unwrap()).unwrap();
        let locale = LocaleNumberParser::new(Locale::english());
        let mut annotation = RuleAnnotator.annotate(text);
        assert_eq!(annotation.tags(), vec![PosTag::Adverb, PosTag::Numeral]);

        // The entity spans both tokens, so it does not cover the numeral exactly.
        annotation.entities = vec![EntitySpan {
            label: EntityLabel::Cardinal,
            start: 0,
            end: text.len(),
            text: text.to_string(),
            first_token: 0,
            last_token: 2,
        }];
        assert_eq!(
            ApproximationClassifier.classify(text, &annotation, &lexicon, &locale),
            ApproxVerdict::new(true, ApproxReason::AdverbNumber)
        );

        annotation.entities.clear();
        assert_eq!(
            ApproximationClassifier.classify(text, &annotation, &lexicon, &locale),
            ApproxVerdict::new(true, ApproxReason::AdverbNumber)
        );
    }

    #[test]
    fn test_entities_decide_the_rest() {
        assert_eq!(
            classify("23 were injured and 11 are missing"),
            ApproxVerdict::new(false, ApproxReason::NumericEntities)
        );
        assert_eq!(classify("unknown!"), ApproxVerdict::new(false, ApproxReason::NumericEntities));
        assert_eq!(classify("floods since 2019"), ApproxVerdict::new(false, ApproxReason::Default));
    }
}
