//! Word-boundary-aware phrase matching over one category, backed by aho-corasick.

use aho_corasick::{AhoCorasick, MatchKind};
use quantex_core::errors::LexiconError;

/// A phrase found in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch<'p> {
    pub phrase: &'p str,
    pub start: usize,
    pub end: usize,
}

/// Case-insensitive multi-phrase matcher.
///
/// An alphabetic edge of a phrase must sit on a word boundary, so "over"
/// never matches inside "moreover". Symbolic phrases ("~", ">=") match anywhere.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    automaton: AhoCorasick,
    phrases: Vec<String>,
}

impl PhraseMatcher {
    pub fn new(phrases: &[String]) -> Result<Self, LexiconError> {
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(phrases)
            .map_err(|e| LexiconError::PatternCompilation {
                phrase: phrases.join(" | "),
                message: e.to_string(),
            })?;
        Ok(Self {
            automaton,
            phrases: phrases.to_vec(),
        })
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// All boundary-respecting occurrences, overlapping ones included,
    /// ordered by start position then longest first.
    pub fn find_all<'s>(&'s self, text: &str) -> Vec<PhraseMatch<'s>> {
        let mut found: Vec<PhraseMatch<'s>> = self
            .automaton
            .find_overlapping_iter(text)
            .filter(|m| on_word_boundaries(text, m.start(), m.end()))
            .map(|m| PhraseMatch {
                phrase: &self.phrases[m.pattern().as_usize()],
                start: m.start(),
                end: m.end(),
            })
            .collect();
        found.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end)));
        found
    }

    /// Leftmost, then longest, boundary-respecting occurrence.
    pub fn find<'s>(&'s self, text: &str) -> Option<PhraseMatch<'s>> {
        self.find_all(text).into_iter().next()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}

/// Alphanumeric phrase edges must not touch alphanumeric neighbors.
pub(crate) fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];
    let first_is_word = matched.chars().next().is_some_and(char::is_alphanumeric);
    let last_is_word = matched.chars().next_back().is_some_and(char::is_alphanumeric);
    if first_is_word && text[..start].chars().next_back().is_some_and(char::is_alphanumeric) {
        return false;
    }
    if last_is_word && text[end..].chars().next().is_some_and(char::is_alphanumeric) {
        return false;
    }
    true
}
