//! The public facade: text or a literal number in, `(min, max, approximate)` out.
//!
//! An engine binds one locale, one lexicon, and one annotator at construction
//! and is immutable afterwards, so a single instance can be shared across threads.

use std::sync::Arc;

use quantex_core::config::{Locale, QuantexConfig};
use quantex_core::errors::{ConfigError, EngineError};
use quantex_core::{Number, QuantityInput, QuantityResult};

use crate::annotate::{Annotator, EntityLabel, RuleAnnotator};
use crate::classify::{ApproxVerdict, ApproximationClassifier};
use crate::lexicon::{CompiledLexicon, Lexicon, PhraseCategory};
use crate::numbers::NumberParser;
use crate::strategies::{Extraction, ExtractionContext, StrategyChain};
use crate::text::{CurrencyValidator, EnglishNumberWords, Iso4217, Preprocessor, WordNumberConverter};

pub struct QuantityEngine {
    locale: Locale,
    lexicon: CompiledLexicon,
    numbers: NumberParser,
    preprocessor: Preprocessor,
    annotator: Box<dyn Annotator>,
    classifier: ApproximationClassifier,
    chain: StrategyChain,
}

impl QuantityEngine {
    /// Engine with the built-in lexicon and annotator for `locale`.
    pub fn new(locale: Locale) -> Result<Self, EngineError> {
        Self::builder().locale(locale).build()
    }

    /// Engine for a resolved configuration. A configured lexicon path replaces
    /// the built-in table.
    pub fn from_config(config: &QuantexConfig) -> Result<Self, EngineError> {
        let mut builder = Self::builder().locale(config.locale.resolve()?);
        if let Some(path) = &config.lexicon.path {
            builder = builder.lexicon(Lexicon::from_path(path)?);
        }
        builder.build()
    }

    pub fn builder() -> QuantityEngineBuilder {
        QuantityEngineBuilder::default()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon.lexicon()
    }

    pub fn annotator(&self) -> &dyn Annotator {
        self.annotator.as_ref()
    }

    /// Normalize text the way extraction sees it.
    pub fn preprocess(&self, text: &str) -> String {
        self.preprocessor.preprocess(text)
    }

    /// Whether `text` reads as an estimate rather than an exact figure.
    pub fn is_approximate(&self, text: &str) -> bool {
        self.classify(&self.preprocess(text)).approximate
    }

    /// Extract with the default entity labels: CARDINAL, MONEY, QUANTITY.
    pub fn extract<'a>(&self, input: impl Into<QuantityInput<'a>>) -> QuantityResult {
        self.extract_numbers(input, &EntityLabel::DEFAULT_NUMERIC)
    }

    /// Extract a quantity range. Literal numbers pass straight through as
    /// exact values; text runs through the strategy chain. Never fails: an
    /// input nothing can make sense of yields [`QuantityResult::failure`].
    pub fn extract_numbers<'a>(
        &self,
        input: impl Into<QuantityInput<'a>>,
        labels: &[EntityLabel],
    ) -> QuantityResult {
        match input.into() {
            QuantityInput::Int(i) => QuantityResult::exact(Number::Int(i)),
            QuantityInput::Float(f) if f.is_finite() => QuantityResult::exact(Number::Float(f)),
            QuantityInput::Float(_) => QuantityResult::failure(),
            QuantityInput::Text(text) => self.extract_text(text, labels),
        }
    }

    fn extract_text(&self, raw: &str, labels: &[EntityLabel]) -> QuantityResult {
        let text = self.preprocessor.preprocess(raw);
        let annotation = self.annotator.annotate(&text);
        let verdict = self
            .classifier
            .classify(&text, &annotation, &self.lexicon, self.numbers.locale());
        tracing::trace!(
            approximate = verdict.approximate,
            reason = ?verdict.reason,
            "approximation classified"
        );

        let ctx = ExtractionContext {
            text: &text,
            annotation: &annotation,
            labels,
            lexicon: &self.lexicon,
            numbers: &self.numbers,
        };
        match self.chain.run(&ctx) {
            Some((strategy, extraction)) => {
                tracing::debug!(strategy, input = raw, "strategy matched");
                assemble(extraction, verdict)
            }
            None => {
                tracing::debug!(input = raw, "no strategy matched");
                QuantityResult::failure()
            }
        }
    }

    fn classify(&self, text: &str) -> ApproxVerdict {
        let annotation = self.annotator.annotate(text);
        self.classifier
            .classify(text, &annotation, &self.lexicon, self.numbers.locale())
    }
}

impl std::fmt::Debug for QuantityEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuantityEngine")
            .field("locale", &self.locale)
            .field("lexicon_version", &self.lexicon.lexicon().version())
            .field("annotator", &self.annotator.name())
            .field("strategies", &self.chain.names())
            .finish()
    }
}

/// Sorted `(min, max)` with the strategy's approximation override, if any.
fn assemble(extraction: Extraction, verdict: ApproxVerdict) -> QuantityResult {
    match extraction {
        Extraction::Zero => QuantityResult::zero(),
        Extraction::Unknown => QuantityResult::unknown(verdict.approximate),
        Extraction::Single { value, approximate } => {
            QuantityResult::range(value, value, approximate.unwrap_or(verdict.approximate))
        }
        Extraction::Pair {
            first,
            second,
            approximate,
        } => QuantityResult::range(first, second, approximate.unwrap_or(verdict.approximate)),
    }
}

/// Builds a [`QuantityEngine`]. Unset parts fall back to the built-in ones
/// for the locale's language.
#[derive(Default)]
pub struct QuantityEngineBuilder {
    locale: Option<Locale>,
    lexicon: Option<Lexicon>,
    annotator: Option<Box<dyn Annotator>>,
    words: Option<Arc<dyn WordNumberConverter>>,
    currency: Option<Arc<dyn CurrencyValidator>>,
}

impl QuantityEngineBuilder {
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn annotator(mut self, annotator: Box<dyn Annotator>) -> Self {
        self.annotator = Some(annotator);
        self
    }

    pub fn word_converter(mut self, words: Arc<dyn WordNumberConverter>) -> Self {
        self.words = Some(words);
        self
    }

    pub fn currency_validator(mut self, currency: Arc<dyn CurrencyValidator>) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn build(self) -> Result<QuantityEngine, EngineError> {
        let locale = self.locale.unwrap_or_default();
        let language = locale.language().to_string();

        let words: Arc<dyn WordNumberConverter> = match self.words {
            Some(words) => words,
            None if language == "en" => Arc::new(EnglishNumberWords),
            None => return Err(EngineError::UnsupportedLanguage { language }),
        };
        if words.language() != language {
            return Err(EngineError::UnsupportedLanguage {
                language: words.language().to_string(),
            });
        }

        let lexicon = match self.lexicon {
            Some(lexicon) => lexicon,
            None => Lexicon::builtin(&language)?,
        };
        if lexicon.language() != language {
            return Err(ConfigError::ValidationFailed {
                field: "lexicon.language".to_string(),
                message: format!(
                    "lexicon is for '{}' but the locale language is '{language}'",
                    lexicon.language()
                ),
            }
            .into());
        }

        let lexicon = CompiledLexicon::new(lexicon)?;
        let numbers = NumberParser::new(locale.clone(), words, lexicon.lexicon())?;
        let currency = self.currency.unwrap_or_else(|| Arc::new(Iso4217::new()));
        let annotator = self.annotator.unwrap_or_else(|| Box::new(RuleAnnotator::new()));

        tracing::info!(
            language = %language,
            lexicon_version = lexicon.lexicon().version(),
            zero_phrases = lexicon.lexicon().phrases(PhraseCategory::Zero).len(),
            unknown_phrases = lexicon.lexicon().phrases(PhraseCategory::Unknown).len(),
            quantifiers = lexicon.lexicon().quantifiers().len(),
            annotator = annotator.name(),
            "quantity engine ready"
        );

        Ok(QuantityEngine {
            locale,
            lexicon,
            numbers,
            preprocessor: Preprocessor::new(currency),
            annotator,
            classifier: ApproximationClassifier,
            chain: StrategyChain::standard(),
        })
    }
}
