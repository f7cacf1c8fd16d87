//! Layered number parsing: locale digits, number words, then shorthand
//! magnitudes ("27 million", "2.5 billion", "5 lakh").

use std::sync::Arc;

use once_cell::sync::Lazy;
use quantex_core::config::Locale;
use quantex_core::errors::LexiconError;
use quantex_core::Number;
use regex::{Captures, Regex};

use crate::lexicon::{Lexicon, ScaleWord, NUMBER_PATTERN};
use crate::text::{LocaleNumberParser, WordNumberConverter};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(NUMBER_PATTERN).expect("valid regex"));

/// Parses number strings for one locale and language.
pub struct NumberParser {
    locale: LocaleNumberParser,
    words: Arc<dyn WordNumberConverter>,
    regional: Option<Regex>,
    decimal_scale: Option<Regex>,
    scale_words: Vec<ScaleWord>,
}

impl NumberParser {
    pub fn new(
        locale: Locale,
        words: Arc<dyn WordNumberConverter>,
        lexicon: &Lexicon,
    ) -> Result<Self, LexiconError> {
        let regional = magnitude_regex(lexicon.regional_scale_words(), r"\s*")?;
        let decimal_scale = magnitude_regex(lexicon.general_scale_words(), r"\s+")?;
        Ok(Self {
            locale: LocaleNumberParser::new(locale),
            words,
            regional,
            decimal_scale,
            scale_words: lexicon.scale_words().to_vec(),
        })
    }

    pub fn locale(&self) -> &LocaleNumberParser {
        &self.locale
    }

    pub fn words(&self) -> &dyn WordNumberConverter {
        self.words.as_ref()
    }

    /// Locale-aware digits, then relaxed number words.
    pub fn parse_direct(&self, text: &str) -> Option<Number> {
        self.locale
            .parse(text)
            .or_else(|| self.words.parse(text, true))
            .filter(|n| n.is_finite())
            .map(Number::normalized)
    }

    /// Digits followed by a magnitude word, tried in order: regional words
    /// ("5 lakh"), digits spelled out ("27 million" -> "twenty-seven million"),
    /// then a decimal times a magnitude ("2.5 billion").
    pub fn parse_shorthand(&self, text: &str) -> Option<Number> {
        self.parse_magnitude(self.regional.as_ref(), text)
            .or_else(|| self.words.parse(&self.spell_digits(text), true))
            .or_else(|| self.parse_magnitude(self.decimal_scale.as_ref(), text))
            .filter(|n| n.is_finite())
            .map(Number::normalized)
    }

    /// Every way this parser knows, direct forms first.
    pub fn parse(&self, text: &str) -> Option<Number> {
        self.parse_direct(text).or_else(|| self.parse_shorthand(text))
    }

    /// Replace each integer digit run with its spelled-out form.
    pub fn spell_digits(&self, text: &str) -> String {
        DIGIT_RUN
            .replace_all(text, |caps: &Captures<'_>| {
                match self.locale.parse(&caps[0]) {
                    Some(Number::Int(n)) => self
                        .words
                        .to_words(n)
                        .unwrap_or_else(|| caps[0].to_string()),
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Value of a magnitude word, case-insensitive.
    pub fn scale_value(&self, word: &str) -> Option<Number> {
        let word = word.trim();
        self.scale_words
            .iter()
            .find(|s| s.word.eq_ignore_ascii_case(word))
            .map(|s| Number::Int(s.value))
    }

    fn parse_magnitude(&self, pattern: Option<&Regex>, text: &str) -> Option<Number> {
        let caps = pattern?.captures(text)?;
        let base = self.locale.parse(&caps["number"])?;
        let scale = self.scale_value(&caps["scale"])?;
        Some(base * scale)
    }
}

impl std::fmt::Debug for NumberParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberParser")
            .field("locale", &self.locale)
            .field("language", &self.words.language())
            .finish_non_exhaustive()
    }
}

/// `^number<sep>(word|word...)$`, or `None` when there are no words.
fn magnitude_regex<'a>(
    words: impl Iterator<Item = &'a ScaleWord>,
    separator: &str,
) -> Result<Option<Regex>, LexiconError> {
    let alternation = words
        .map(|s| regex::escape(&s.word))
        .collect::<Vec<_>>()
        .join("|");
    if alternation.is_empty() {
        return Ok(None);
    }
    let pattern = format!(
        r"(?i)^\s*(?P<number>{NUMBER_PATTERN}){separator}(?P<scale>{alternation})\s*$"
    );
    Regex::new(&pattern)
        .map(Some)
        .map_err(|e| LexiconError::PatternCompilation {
            phrase: alternation,
            message: e.to_string(),
        })
}
