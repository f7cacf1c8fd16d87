//! Property tests for extraction invariants.

use once_cell::sync::Lazy;
use proptest::prelude::*;
use quantex_core::config::Locale;
use quantex_core::{Number, Outcome};
use quantex_engine::lexicon::PhraseCategory;
use quantex_engine::text::{EnglishNumberWords, WordNumberConverter};
use quantex_engine::QuantityEngine;

static ENGINE: Lazy<QuantityEngine> =
    Lazy::new(|| QuantityEngine::new(Locale::english()).unwrap());

fn zero_phrases() -> Vec<String> {
    ENGINE.lexicon().phrases(PhraseCategory::Zero).to_vec()
}

proptest! {
    #[test]
    fn results_are_well_formed(s in "[a-zA-Z0-9 ,.~$%-]{0,40}") {
        let result = ENGINE.extract(s.as_str());
        prop_assert_eq!(result.min.is_some(), result.max.is_some());
        prop_assert_eq!(result.approximate.is_none(), result.outcome == Outcome::ParseFailure);
        if let (Some(min), Some(max)) = (result.min, result.max) {
            prop_assert!(min.total_cmp(&max).is_le(), "{} > {} for {:?}", min, max, s);
        }
    }

    #[test]
    fn preprocessing_is_idempotent(s in "[a-zA-Z0-9 ,.~$€£%-]{0,30}") {
        let once = ENGINE.preprocess(&s);
        prop_assert_eq!(ENGINE.preprocess(&once), once);
    }

    #[test]
    fn integers_pass_through(n in any::<i64>()) {
        let result = ENGINE.extract(n);
        prop_assert_eq!(result.as_tuple(), (Some(Number::Int(n)), Some(Number::Int(n)), Some(false)));
    }

    #[test]
    fn finite_floats_pass_through(f in prop::num::f64::NORMAL) {
        let result = ENGINE.extract(f);
        prop_assert_eq!(result.min.map(Number::as_f64), Some(f));
        prop_assert_eq!(result.approximate, Some(false));
    }

    #[test]
    fn zero_phrases_win(idx in any::<prop::sample::Index>(), tail in "( [a-z]{2,8}){0,3}") {
        let phrases = zero_phrases();
        let text = format!("{}{}", idx.get(&phrases), tail);
        prop_assert_eq!(ENGINE.extract(text.as_str()).outcome, Outcome::RecognizedZero);
    }

    #[test]
    fn spelled_numbers_are_exact(n in 1i64..1_000_000) {
        let words = EnglishNumberWords.to_words(n).unwrap();
        let result = ENGINE.extract(words.as_str());
        prop_assert_eq!(result.as_tuple(), (Some(Number::Int(n)), Some(Number::Int(n)), Some(false)), "{}", words);
    }

    #[test]
    fn approximate_ranges_contain_the_value(n in 1i64..100_000) {
        let result = ENGINE.extract(format!("about {n}").as_str());
        prop_assert_eq!(result.approximate, Some(true));
        let (min, max) = (result.min.unwrap(), result.max.unwrap());
        prop_assert!(min <= Number::Int(n) && Number::Int(n) <= max);
    }

    #[test]
    fn at_least_starts_at_the_value(n in 1i64..100_000) {
        let result = ENGINE.extract(format!("at least {n}").as_str());
        prop_assert_eq!(result.min, Some(Number::Int(n)));
        prop_assert!(result.max.unwrap() > Number::Int(n));
    }
}
