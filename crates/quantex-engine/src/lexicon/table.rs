//! The in-memory phrase lexicon.

use rustc_hash::FxHashMap;

use super::types::{FamilyModifier, PhraseCategory, QuantifierEntry, ScaleWord};

/// Validated phrase tables for one language.
///
/// Every phrase list is lowercase, deduplicated, and sorted longest-first.
/// Quantifiers are ordered by tier, then longest-first.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub(crate) version: u32,
    pub(crate) language: String,
    pub(crate) phrases: FxHashMap<PhraseCategory, Vec<String>>,
    pub(crate) scale_words: Vec<ScaleWord>,
    pub(crate) family: FamilyModifier,
    pub(crate) quantifiers: Vec<QuantifierEntry>,
}

impl Lexicon {
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Phrases of a category, longest first. Empty for unknown categories.
    pub fn phrases(&self, category: PhraseCategory) -> &[String] {
        self.phrases.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All scale words, general and regional, longest first.
    pub fn scale_words(&self) -> &[ScaleWord] {
        &self.scale_words
    }

    pub fn general_scale_words(&self) -> impl Iterator<Item = &ScaleWord> {
        self.scale_words.iter().filter(|s| !s.regional)
    }

    pub fn regional_scale_words(&self) -> impl Iterator<Item = &ScaleWord> {
        self.scale_words.iter().filter(|s| s.regional)
    }

    /// Value of a scale word, case-insensitive.
    pub fn scale_value(&self, word: &str) -> Option<i64> {
        let word = word.trim();
        self.scale_words
            .iter()
            .find(|s| s.word.eq_ignore_ascii_case(word))
            .map(|s| s.value)
    }

    pub fn family(&self) -> &FamilyModifier {
        &self.family
    }

    pub fn quantifiers(&self) -> &[QuantifierEntry] {
        &self.quantifiers
    }
}

/// Lowercase, trim, drop empties and duplicates, then sort longest-first.
pub(crate) fn normalize_phrases<I, S>(phrases: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = phrases
        .into_iter()
        .map(|p| p.as_ref().trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();
    sort_longest_first(&mut out);
    out.dedup();
    out
}

pub(crate) fn sort_longest_first(phrases: &mut [String]) {
    phrases.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sorts_longest_first_and_dedups() {
        let phrases = normalize_phrases(["over", " More Than ", "more than", "", ">"]);
        assert_eq!(phrases, vec!["more than", "over", ">"]);
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let phrases = normalize_phrases(["under", "below", "above"]);
        assert_eq!(phrases, vec!["above", "below", "under"]);
    }
}
