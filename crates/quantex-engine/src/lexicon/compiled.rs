//! Lexicon compiled for matching: one automaton per category plus the
//! regexes the range and quantifier strategies run. Built once per engine.

use quantex_core::errors::LexiconError;
use regex::Regex;
use rustc_hash::FxHashMap;

use super::matcher::PhraseMatcher;
use super::table::Lexicon;
use super::types::{BoundKind, PhraseCategory, QuantifierEntry};

/// Digits with optional separator groups: "3600", "3,600", "2.5".
pub const NUMBER_PATTERN: &str = r"\d+(?:[.,]\d+)*";

/// A bounding phrase and the regex that captures the number beside it.
///
/// Capture groups: `pre`, `pre_scale`, `phrase`, `post`, `post_scale`.
#[derive(Debug, Clone)]
pub struct BoundPattern {
    pub category: PhraseCategory,
    pub kind: BoundKind,
    pub phrase: String,
    pub regex: Regex,
}

#[derive(Debug, Clone)]
pub struct QuantifierPattern {
    pub entry: QuantifierEntry,
    pub regex: Regex,
}

#[derive(Debug, Clone)]
pub struct CompiledLexicon {
    lexicon: Lexicon,
    matchers: FxHashMap<PhraseCategory, PhraseMatcher>,
    bound_patterns: Vec<BoundPattern>,
    quantifier_patterns: Vec<QuantifierPattern>,
}

impl CompiledLexicon {
    pub fn new(lexicon: Lexicon) -> Result<Self, LexiconError> {
        let mut matchers = FxHashMap::default();
        for category in PhraseCategory::ALL {
            matchers.insert(category, PhraseMatcher::new(lexicon.phrases(category))?);
        }

        let scale_alternation = lexicon
            .scale_words()
            .iter()
            .map(|s| regex::escape(&s.word))
            .collect::<Vec<_>>()
            .join("|");

        let mut bound_patterns = Vec::new();
        for category in PhraseCategory::BOUNDING {
            let Some(kind) = category.bound_kind() else {
                continue;
            };
            for phrase in lexicon.phrases(category) {
                let pattern = format!(
                    r"(?i)(?:(?P<pre>{num})(?:\s*(?P<pre_scale>{scales})\b)?\s*)?(?P<phrase>{phrase})(?:\s*(?P<post>{num})(?:\s*(?P<post_scale>{scales})\b)?)?",
                    num = NUMBER_PATTERN,
                    scales = scale_alternation,
                    phrase = phrase_pattern(phrase),
                );
                bound_patterns.push(BoundPattern {
                    category,
                    kind,
                    phrase: phrase.clone(),
                    regex: compile(phrase, &pattern)?,
                });
            }
        }

        let mut quantifier_patterns = Vec::with_capacity(lexicon.quantifiers().len());
        for entry in lexicon.quantifiers() {
            let pattern = format!("(?i){}", phrase_pattern(&entry.phrase));
            quantifier_patterns.push(QuantifierPattern {
                entry: entry.clone(),
                regex: compile(&entry.phrase, &pattern)?,
            });
        }

        Ok(Self {
            lexicon,
            matchers,
            bound_patterns,
            quantifier_patterns,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn matcher(&self, category: PhraseCategory) -> &PhraseMatcher {
        // Every category gets a matcher in `new`.
        &self.matchers[&category]
    }

    /// True if any phrase of `category` occurs in `text`.
    pub fn contains(&self, category: PhraseCategory, text: &str) -> bool {
        self.matcher(category).is_match(text)
    }

    /// Bounding phrase patterns in matching order: category priority, then longest phrase first.
    pub fn bound_patterns(&self) -> &[BoundPattern] {
        &self.bound_patterns
    }

    /// Quantifier patterns in tier order, longest phrase first within a tier.
    pub fn quantifier_patterns(&self) -> &[QuantifierPattern] {
        &self.quantifier_patterns
    }
}

/// Regex for a phrase: words joined by `\s+`, `\b` on alphanumeric edges.
pub(crate) fn phrase_pattern(phrase: &str) -> String {
    let body = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let lead = if phrase.chars().next().is_some_and(char::is_alphanumeric) {
        r"\b"
    } else {
        ""
    };
    let trail = if phrase.chars().next_back().is_some_and(char::is_alphanumeric) {
        r"\b"
    } else {
        ""
    };
    format!("{lead}{body}{trail}")
}

fn compile(phrase: &str, pattern: &str) -> Result<Regex, LexiconError> {
    Regex::new(pattern).map_err(|e| LexiconError::PatternCompilation {
        phrase: phrase.to_string(),
        message: e.to_string(),
    })
}
