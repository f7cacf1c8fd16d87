//! Spelled-out numbers: "three hundred and fifty-five billion" <-> 355000000000.

use quantex_core::Number;

/// Converts between spelled-out numbers and values for one language.
pub trait WordNumberConverter: Send + Sync {
    fn language(&self) -> &str;

    /// Parse a spelled-out number. `relaxed` accepts "and" between groups,
    /// a leading "a"/"an" before a multiplier, commas, and edge punctuation.
    fn parse(&self, text: &str, relaxed: bool) -> Option<Number>;

    /// Spell out a non-negative integer.
    fn to_words(&self, value: i64) -> Option<String>;
}

const ONES: &[(&str, i64)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

const TEENS: &[(&str, i64)] = &[
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: &[(&str, i64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const SCALES: &[(&str, i64)] = &[
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
];

/// Upper bound (exclusive) for `to_words`.
const SPELLABLE_LIMIT: i64 = 1_000_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Word {
    Zero,
    Ones(i64),
    Teen(i64),
    Tens(i64),
    TensOnes(i64),
    Hundred,
    Scale(i64),
    And,
    Article,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Start,
    Ones,
    Teen,
    Tens,
    TensOnes,
    Hundred,
    Scale,
    And,
    Article,
}

fn lookup(table: &[(&str, i64)], word: &str) -> Option<i64> {
    table.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

fn classify(word: &str) -> Option<Word> {
    if let Some((tens, ones)) = word.split_once('-') {
        let tens = lookup(TENS, tens)?;
        let ones = lookup(ONES, ones)?;
        return Some(Word::TensOnes(tens + ones));
    }
    match word {
        "zero" => Some(Word::Zero),
        "hundred" => Some(Word::Hundred),
        "and" => Some(Word::And),
        "a" | "an" => Some(Word::Article),
        _ => lookup(ONES, word)
            .map(Word::Ones)
            .or_else(|| lookup(TEENS, word).map(Word::Teen))
            .or_else(|| lookup(TENS, word).map(Word::Tens))
            .or_else(|| lookup(SCALES, word).map(Word::Scale)),
    }
}

/// English cardinal numbers up to the trillions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNumberWords;

impl WordNumberConverter for EnglishNumberWords {
    fn language(&self) -> &str {
        "en"
    }

    fn parse(&self, text: &str, relaxed: bool) -> Option<Number> {
        let lowered = text.to_lowercase();
        let cleaned = if relaxed {
            lowered.replace(',', " ")
        } else {
            lowered
        };
        let words: Vec<&str> = cleaned
            .split_whitespace()
            .map(|w| {
                if relaxed {
                    w.trim_matches(|c: char| matches!(c, '.' | '!' | '?' | ';' | ':'))
                } else {
                    w
                }
            })
            .filter(|w| !w.is_empty())
            .collect();

        match words.as_slice() {
            [] => return None,
            ["zero"] => return Some(Number::Int(0)),
            _ => {}
        }

        let mut total: i64 = 0;
        let mut group: i64 = 0;
        let mut last = Last::Start;
        let mut last_scale = i64::MAX;

        for (i, raw) in words.iter().enumerate() {
            let word = classify(raw)?;
            last = match word {
                Word::Zero => return None,
                Word::Article => {
                    let next = words.get(i + 1).and_then(|w| classify(w));
                    if !relaxed || i != 0 || !matches!(next, Some(Word::Hundred | Word::Scale(_))) {
                        return None;
                    }
                    group = 1;
                    Last::Article
                }
                Word::And => {
                    if !relaxed || !matches!(last, Last::Hundred | Last::Scale) || i + 1 == words.len() {
                        return None;
                    }
                    Last::And
                }
                Word::Ones(v) => match last {
                    Last::Tens => {
                        group += v;
                        Last::TensOnes
                    }
                    Last::Start | Last::Hundred | Last::Scale | Last::And => {
                        group += v;
                        Last::Ones
                    }
                    _ => return None,
                },
                Word::Teen(v) | Word::Tens(v) | Word::TensOnes(v) => {
                    if !matches!(last, Last::Start | Last::Hundred | Last::Scale | Last::And) {
                        return None;
                    }
                    group += v;
                    match word {
                        Word::Teen(_) => Last::Teen,
                        Word::Tens(_) => Last::Tens,
                        _ => Last::TensOnes,
                    }
                }
                Word::Hundred => {
                    let follows_count = matches!(
                        last,
                        Last::Ones | Last::Teen | Last::Tens | Last::TensOnes | Last::Article
                    );
                    if !follows_count || group == 0 || group >= 100 {
                        return None;
                    }
                    group *= 100;
                    Last::Hundred
                }
                Word::Scale(scale) => {
                    let follows_count = matches!(
                        last,
                        Last::Ones
                            | Last::Teen
                            | Last::Tens
                            | Last::TensOnes
                            | Last::Hundred
                            | Last::Article
                    );
                    if !follows_count || group == 0 || scale >= last_scale {
                        return None;
                    }
                    total = total.checked_add(group.checked_mul(scale)?)?;
                    group = 0;
                    last_scale = scale;
                    Last::Scale
                }
            };
        }

        if matches!(last, Last::Start | Last::And | Last::Article) {
            return None;
        }
        total.checked_add(group).map(Number::Int)
    }

    fn to_words(&self, value: i64) -> Option<String> {
        if !(0..SPELLABLE_LIMIT).contains(&value) {
            return None;
        }
        if value == 0 {
            return Some("zero".to_string());
        }
        let mut parts: Vec<String> = Vec::new();
        let mut remaining = value;
        for (name, scale) in SCALES.iter().rev() {
            if remaining >= *scale {
                parts.push(format!("{} {name}", below_thousand(remaining / scale)));
                remaining %= scale;
            }
        }
        if remaining > 0 {
            if !parts.is_empty() && remaining < 100 {
                parts.push("and".to_string());
            }
            parts.push(below_thousand(remaining));
        }
        Some(parts.join(" "))
    }
}

fn below_hundred(n: i64) -> String {
    let name = |table: &[(&'static str, i64)], v: i64| {
        table
            .iter()
            .find(|(_, value)| *value == v)
            .map(|(w, _)| *w)
            .unwrap_or_default()
    };
    match n {
        1..=9 => name(ONES, n).to_string(),
        10..=19 => name(TEENS, n).to_string(),
        _ if n % 10 == 0 => name(TENS, n).to_string(),
        _ => format!("{}-{}", name(TENS, n - n % 10), name(ONES, n % 10)),
    }
}

fn below_thousand(n: i64) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    let mut parts: Vec<String> = Vec::new();
    if hundreds > 0 {
        parts.push(format!("{} hundred", below_hundred(hundreds)));
    }
    if rest > 0 {
        if hundreds > 0 {
            parts.push("and".to_string());
        }
        parts.push(below_hundred(rest));
    }
    parts.join(" ")
}
