//! Tests for the annotator seam: the built-in annotator, custom annotators,
//! and the load timeout guard.

use std::time::Duration;

use quantex_core::config::Locale;
use quantex_core::{ErrorCode, Number};
use quantex_engine::annotate::{load_with_timeout, PosTag};
use quantex_engine::{Annotation, Annotator, EntityLabel, QuantityEngine, RuleAnnotator};

/// Tokens and tags from the built-in annotator, but no entities.
struct TokensOnly;

impl Annotator for TokensOnly {
    fn name(&self) -> &str {
        "tokens-only"
    }

    fn annotate(&self, text: &str) -> Annotation {
        Annotation {
            entities: Vec::new(),
            ..RuleAnnotator.annotate(text)
        }
    }
}

/// The built-in annotator tags numerals and labels numeric entities.
#[test]
fn test_rule_annotator_entities() {
    let annotation = RuleAnnotator.annotate("$5 million in damage to 300 homes");
    let labels: Vec<_> = annotation.entities.iter().map(|e| e.label).collect();
    assert_eq!(labels, vec![EntityLabel::Money, EntityLabel::Cardinal]);
    assert!(annotation.tags().contains(&PosTag::Numeral));
}

/// Entity spans point back into the annotated text.
#[test]
fn test_entity_offsets() {
    let text = "floods destroyed 300 homes";
    let annotation = RuleAnnotator.annotate(text);
    let span = &annotation.entities[0];
    assert_eq!(&text[span.start..span.end], "300");
    assert_eq!(span.text, "300");
}

/// A custom annotator replaces the built-in one; without entities the
/// token fallback takes over.
#[test]
fn test_custom_annotator() {
    let engine = QuantityEngine::builder()
        .locale(Locale::english())
        .annotator(Box::new(TokensOnly))
        .build()
        .unwrap();
    assert_eq!(engine.annotator().name(), "tokens-only");
    assert_eq!(
        engine.extract("23 were injured and 11 are missing").as_tuple(),
        (Some(Number::Int(11)), Some(Number::Int(23)), Some(true))
    );
}

/// A loader that finishes in time hands back its annotator.
#[test]
fn test_load_with_timeout_success() {
    let annotator = load_with_timeout(|| Ok(RuleAnnotator::new()), Duration::from_secs(5)).unwrap();
    assert_eq!(annotator.name(), "rule-based-en");
}

/// A slow loader is abandoned with a timeout error.
#[test]
fn test_load_with_timeout_expires() {
    let err = load_with_timeout(
        || {
            std::thread::sleep(Duration::from_millis(500));
            Ok(RuleAnnotator::new())
        },
        Duration::from_millis(20),
    )
    .unwrap_err();
    assert_eq!(err.error_code(), "ANNOTATOR_TIMEOUT");
}
