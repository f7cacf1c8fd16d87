//! Rule-based part-of-speech tagging: closed word classes, suffix heuristics,
//! and a noun default.

use super::types::{PosTag, Token};
use crate::text::currency::is_currency_symbol;

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "lakh", "lakhs", "crore", "crores",
];

const COMPOUND_TENS: &[&str] = &["twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"];

const COMPOUND_ONES: &[&str] = &["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "no", "some", "any",
    "all", "both", "another", "such", "either", "neither",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "from", "with", "to", "into", "onto", "over", "under",
    "above", "below", "than", "across", "after", "before", "during", "near", "per", "since",
    "through", "throughout", "within", "without", "among", "amongst", "between", "toward",
    "towards", "upon", "via", "despite", "against", "along", "amid", "beyond", "inside",
    "outside", "like", "unlike",
];

const ADVERBS: &[&str] = &[
    "about", "around", "nearly", "almost", "approximately", "approx", "roughly", "circa",
    "just", "only", "exactly", "precisely", "very", "also", "still", "already", "up", "down",
    "too", "so", "then", "there", "here", "now", "well", "even", "more", "less", "some",
    "estimated", "reportedly", "respectively", "ago",
];

const SUPERLATIVES: &[&str] = &[
    "least", "most", "fewest", "highest", "lowest", "largest", "biggest", "smallest",
    "greatest", "maximum", "minimum",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "plus", "yet", "&"];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "who",
    "whom", "nobody", "everyone", "everybody", "someone", "somebody", "anyone", "none",
    "nothing", "something",
];

const AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "will",
    "would", "could", "should", "may", "might", "must", "can", "do", "does", "did", "shall",
];

const PARTICLES: &[&str] = &["not", "n't", "'s"];

const ADJECTIVES: &[&str] = &[
    "few", "fewer", "several", "many", "numerous", "other", "additional", "total", "new",
    "major", "minor", "severe", "greater", "lower", "higher", "unknown", "dead", "missing",
    "homeless", "injured",
];

/// Nouns ending in "-ly" that are not adverbs.
const LY_NOUNS: &[&str] = &["family", "july", "italy", "supply", "assembly", "rally", "ally", "reply"];

const SYMBOLS: &[&str] = &["~", "+", "±", "<", ">", "=", "≤", "≥", "≈", ">=", "<=", "+/-", "#", "*"];

/// True for digit tokens and English number words, hyphenated compounds included.
pub fn is_number_like(text: &str) -> bool {
    if text.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return true;
    }
    let lower = text.to_lowercase();
    match lower.split_once('-') {
        Some((tens, ones)) => COMPOUND_TENS.contains(&tens) && COMPOUND_ONES.contains(&ones),
        None => NUMBER_WORDS.contains(&lower.as_str()),
    }
}

/// Assign `pos` and `like_num` to every token.
pub fn tag(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        let lower = tokens[i].lower();
        let next_lower = tokens.get(i + 1).map(Token::lower);
        let sentence_start = i == 0
            || matches!(tokens[i - 1].text.as_str(), "." | "!" | "?" | ":" | ";");
        let like_num = is_number_like(&tokens[i].text);
        let pos = classify(&tokens[i].text, &lower, next_lower.as_deref(), sentence_start, like_num);
        tokens[i].pos = pos;
        tokens[i].like_num = like_num;
    }
}

fn classify(text: &str, lower: &str, next: Option<&str>, sentence_start: bool, like_num: bool) -> PosTag {
    let first = text.chars().next().unwrap_or(' ');

    if like_num {
        return PosTag::Numeral;
    }
    if SYMBOLS.contains(&lower) {
        return PosTag::Symbol;
    }
    if lower == "%" {
        return PosTag::Noun;
    }
    if !first.is_alphanumeric() {
        return if is_currency_symbol(first) {
            PosTag::Symbol
        } else {
            PosTag::Punctuation
        };
    }
    // "at least", "at most" act as one adverbial modifier.
    if lower == "at" && matches!(next, Some("least" | "most")) {
        return PosTag::Adverb;
    }

    let closed_classes: [(&[&str], PosTag); 10] = [
        (SUPERLATIVES, PosTag::Superlative),
        (DETERMINERS, PosTag::Determiner),
        (CONJUNCTIONS, PosTag::Conjunction),
        (AUXILIARIES, PosTag::Auxiliary),
        (PARTICLES, PosTag::Particle),
        (PRONOUNS, PosTag::Pronoun),
        (ADVERBS, PosTag::Adverb),
        (ADPOSITIONS, PosTag::Adposition),
        (ADJECTIVES, PosTag::Adjective),
        (LY_NOUNS, PosTag::Noun),
    ];
    for (words, pos) in closed_classes {
        if words.contains(&lower) {
            return pos;
        }
    }

    let all_caps = text.chars().count() >= 2 && text.chars().all(|c| c.is_uppercase());
    if all_caps || (first.is_uppercase() && !sentence_start) {
        return PosTag::ProperNoun;
    }
    if lower.len() > 4 && lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    if lower.len() > 4 && (lower.ends_with("ed") || lower.ends_with("ing")) {
        return PosTag::Verb;
    }
    PosTag::Noun
}
