//! Text normalization applied before annotation and extraction.
//!
//! Strips currency symbols and standalone ISO codes, expands shorthand
//! magnitudes ("20k", "5bn", "3 mil"), and separates digits from letters.
//! Applying it twice gives the same result as applying it once.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::currency::{is_currency_symbol, CurrencyValidator};

/// Shorthand letters glued to a digit: "20k", "5bn", "23M".
static GLUED_SHORTHAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d)(k|m|b|t|bn|mn)\b").expect("valid regex"));

static DIGIT_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)([^\W\d_])").expect("valid regex"));

static LETTER_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\W\d_])(\d)").expect("valid regex"));

/// Standalone abbreviated magnitudes: "3 mil", "2 bln".
static STANDALONE_SHORTHAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(mil|mln|bil|bln|tril)\b").expect("valid regex"));

static UPPERCASE_TRIGRAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{3}\b").expect("valid regex"));

fn shorthand_word(suffix: &str) -> &'static str {
    match suffix.to_ascii_lowercase().as_str() {
        "k" => "thousand",
        "m" | "mn" | "mil" | "mln" => "million",
        "b" | "bn" | "bil" | "bln" => "billion",
        _ => "trillion",
    }
}

pub struct Preprocessor {
    currency: Arc<dyn CurrencyValidator>,
}

impl Preprocessor {
    pub fn new(currency: Arc<dyn CurrencyValidator>) -> Self {
        Self { currency }
    }

    pub fn preprocess(&self, text: &str) -> String {
        let stripped: String = text
            .chars()
            .map(|c| if is_currency_symbol(c) { ' ' } else { c })
            .collect();

        let expanded = GLUED_SHORTHAND.replace_all(&stripped, |caps: &Captures<'_>| {
            format!("{} {}", &caps[1], shorthand_word(&caps[2]))
        });
        let spaced = DIGIT_LETTER.replace_all(&expanded, "$1 $2");
        let spaced = LETTER_DIGIT.replace_all(&spaced, "$1 $2");
        let spaced = STANDALONE_SHORTHAND
            .replace_all(&spaced, |caps: &Captures<'_>| shorthand_word(&caps[1]).to_string());

        let without_codes = UPPERCASE_TRIGRAM.replace_all(&spaced, |caps: &Captures<'_>| {
            if self.currency.is_currency_code(&caps[0]) {
                String::new()
            } else {
                caps[0].to_string()
            }
        });

        without_codes.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl std::fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preprocessor").finish_non_exhaustive()
    }
}
