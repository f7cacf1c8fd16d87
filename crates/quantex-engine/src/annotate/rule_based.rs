//! The built-in English annotator, plus a timeout guard for annotator loading.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use quantex_core::errors::AnnotatorError;

use super::ner::recognize;
use super::tagger::tag;
use super::tokenizer::tokenize;
use super::types::{Annotation, Annotator};

/// Tokenizer, closed-class tagger, and numeric NER for English.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAnnotator;

impl RuleAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for RuleAnnotator {
    fn name(&self) -> &str {
        "rule-based-en"
    }

    fn annotate(&self, text: &str) -> Annotation {
        let mut tokens = tokenize(text);
        tag(&mut tokens);
        let entities = recognize(text, &tokens);
        Annotation {
            text: text.to_string(),
            tokens,
            entities,
        }
    }
}

/// Run an annotator loader on its own thread and give up after `timeout`.
///
/// A loader that outlives the timeout keeps running detached; its result is dropped.
pub fn load_with_timeout<A, F>(loader: F, timeout: Duration) -> Result<A, AnnotatorError>
where
    A: Send + 'static,
    F: FnOnce() -> Result<A, AnnotatorError> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("quantex-annotator-load".to_string())
        .spawn(move || {
            let _ = tx.send(loader());
        })
        .map_err(|e| AnnotatorError::LoadFailed(format!("failed to spawn loader thread: {e}")))?;

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "annotator load timed out");
            Err(AnnotatorError::LoadTimeout {
                timeout_ms: timeout.as_millis() as u64,
            })
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(AnnotatorError::LoadFailed(
            "loader thread exited without a result".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::types::{EntityLabel, PosTag};

    #[test]
    fn test_annotates_tokens_and_entities() {
        let annotation = RuleAnnotator.annotate("at least 3,600 were missing");
        assert_eq!(annotation.tokens.len(), 5);
        assert_eq!(annotation.tokens[2].pos, PosTag::Numeral);
        assert!(annotation.tokens[2].like_num);
        assert_eq!(annotation.entities.len(), 1);
        assert_eq!(annotation.entities[0].label, EntityLabel::Cardinal);
        assert_eq!(annotation.entities[0].text, "3,600");
    }

    #[test]
    fn test_load_returns_loader_result() {
        let annotator = load_with_timeout(|| Ok(RuleAnnotator::new()), Duration::from_secs(5)).unwrap();
        assert_eq!(annotator.name(), "rule-based-en");
    }

    #[test]
    fn test_load_propagates_loader_failure() {
        let err = load_with_timeout::<RuleAnnotator, _>(
            || Err(AnnotatorError::LoadFailed("model missing".into())),
            Duration::from_secs(5),
        )
        .unwrap_err();
        assert!(matches!(err, AnnotatorError::LoadFailed(ref m) if m == "model missing"));
    }

    #[test]
    fn test_load_times_out() {
        let err = load_with_timeout(
            || {
                thread::sleep(Duration::from_millis(500));
                Ok(RuleAnnotator::new())
            },
            Duration::from_millis(20),
        )
        .unwrap_err();
        assert!(matches!(err, AnnotatorError::LoadTimeout { timeout_ms: 20 }));
    }
}
