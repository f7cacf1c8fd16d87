//! Lexicon loading: built-in tables via `include_str!`, or a TOML file on disk.

use std::collections::BTreeMap;
use std::path::Path;

use quantex_core::constants::{DEFAULT_FAMILY_LOWER, DEFAULT_FAMILY_UPPER};
use quantex_core::errors::{EngineError, LexiconError};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::table::{normalize_phrases, Lexicon};
use super::types::{FamilyModifier, PhraseCategory, QuantifierEntry, QuantifierTier, ScaleWord};

const BUILTIN_EN: &str = include_str!("../../lexicon/en.toml");

/// Languages with a built-in lexicon.
pub const BUILTIN_LANGUAGES: &[&str] = &["en"];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    version: u32,
    language: String,
    phrases: PhraseTables,
    #[serde(default)]
    scale_words: BTreeMap<String, i64>,
    #[serde(default)]
    regional_scale_words: BTreeMap<String, i64>,
    family: FamilyDef,
    #[serde(default)]
    quantifiers: QuantifierTiers,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PhraseTables {
    zero: Vec<String>,
    unknown: Vec<String>,
    approximately: Vec<String>,
    over: Vec<String>,
    over_inclusive: Vec<String>,
    under: Vec<String>,
    under_inclusive: Vec<String>,
    exactly: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FamilyDef {
    #[serde(default = "default_family_lower")]
    lower: i64,
    #[serde(default = "default_family_upper")]
    upper: i64,
    synonyms: Vec<String>,
}

fn default_family_lower() -> i64 {
    DEFAULT_FAMILY_LOWER
}

fn default_family_upper() -> i64 {
    DEFAULT_FAMILY_UPPER
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct QuantifierTiers {
    compound: Vec<QuantifierDef>,
    single: Vec<QuantifierDef>,
    intensifier: Vec<QuantifierDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuantifierDef {
    phrase: String,
    magnitude: i64,
    lower: i64,
    upper: i64,
}

impl Lexicon {
    /// The built-in lexicon for `language`.
    pub fn builtin(language: &str) -> Result<Self, EngineError> {
        match language.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::from_toml_str(BUILTIN_EN, "builtin:en")?),
            other => Err(EngineError::UnsupportedLanguage {
                language: other.to_string(),
            }),
        }
    }

    /// Load a lexicon from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|e| LexiconError::Parse {
            source_name: path.display().to_string(),
            message: format!("failed to read: {e}"),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Parse and validate a lexicon from TOML text.
    pub fn from_toml_str(toml_str: &str, source_name: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = toml::from_str(toml_str).map_err(|e| LexiconError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
        Self::compile(file, source_name)
    }

    fn compile(file: LexiconFile, source_name: &str) -> Result<Self, LexiconError> {
        let language = file.language.trim().to_ascii_lowercase();
        if language.is_empty() {
            return Err(LexiconError::Parse {
                source_name: source_name.to_string(),
                message: "language must not be empty".to_string(),
            });
        }

        let mut phrases = FxHashMap::default();
        let tables = file.phrases;
        for (category, list) in [
            (PhraseCategory::Zero, tables.zero),
            (PhraseCategory::Unknown, tables.unknown),
            (PhraseCategory::Approximately, tables.approximately),
            (PhraseCategory::Over, tables.over),
            (PhraseCategory::OverInclusive, tables.over_inclusive),
            (PhraseCategory::Under, tables.under),
            (PhraseCategory::UnderInclusive, tables.under_inclusive),
            (PhraseCategory::Exactly, tables.exactly),
        ] {
            phrases.insert(category, non_empty(category, normalize_phrases(list))?);
        }

        let scale_words = compile_scale_words(
            file.scale_words,
            file.regional_scale_words,
            source_name,
        )?;
        phrases.insert(
            PhraseCategory::ScaleWord,
            non_empty(
                PhraseCategory::ScaleWord,
                scale_words.iter().map(|s| s.word.clone()).collect(),
            )?,
        );

        let family = FamilyModifier {
            lower: file.family.lower,
            upper: file.family.upper,
            synonyms: non_empty(
                PhraseCategory::FamilySynonym,
                normalize_phrases(file.family.synonyms),
            )?,
        };
        if family.lower < 1 || family.lower > family.upper {
            return Err(LexiconError::Parse {
                source_name: source_name.to_string(),
                message: format!(
                    "family multipliers must satisfy 1 <= lower <= upper, got {}..{}",
                    family.lower, family.upper
                ),
            });
        }
        phrases.insert(PhraseCategory::FamilySynonym, family.synonyms.clone());

        let quantifiers = compile_quantifiers(file.quantifiers)?;
        phrases.insert(
            PhraseCategory::QuantifierPhrase,
            non_empty(
                PhraseCategory::QuantifierPhrase,
                quantifiers.iter().map(|q| q.phrase.clone()).collect(),
            )?,
        );

        tracing::debug!(
            source = source_name,
            version = file.version,
            language = %language,
            quantifiers = quantifiers.len(),
            "lexicon loaded"
        );

        Ok(Lexicon {
            version: file.version,
            language,
            phrases,
            scale_words,
            family,
            quantifiers,
        })
    }
}

fn non_empty(category: PhraseCategory, list: Vec<String>) -> Result<Vec<String>, LexiconError> {
    if list.is_empty() {
        Err(LexiconError::EmptyCategory {
            category: category.name().to_string(),
        })
    } else {
        Ok(list)
    }
}

fn compile_scale_words(
    general: BTreeMap<String, i64>,
    regional: BTreeMap<String, i64>,
    source_name: &str,
) -> Result<Vec<ScaleWord>, LexiconError> {
    let mut words = Vec::with_capacity(general.len() + regional.len());
    for (table, is_regional) in [(general, false), (regional, true)] {
        for (word, value) in table {
            let word = word.trim().to_lowercase();
            if word.is_empty() || value < 2 {
                return Err(LexiconError::Parse {
                    source_name: source_name.to_string(),
                    message: format!("invalid scale word '{word}' = {value}"),
                });
            }
            words.push(ScaleWord {
                word,
                value,
                regional: is_regional,
            });
        }
    }
    words.sort_by(|a, b| b.word.len().cmp(&a.word.len()).then_with(|| a.word.cmp(&b.word)));
    words.dedup_by(|a, b| a.word == b.word);
    Ok(words)
}

fn compile_quantifiers(tiers: QuantifierTiers) -> Result<Vec<QuantifierEntry>, LexiconError> {
    let mut entries = Vec::new();
    for (tier, defs) in [
        (QuantifierTier::Compound, tiers.compound),
        (QuantifierTier::Single, tiers.single),
        (QuantifierTier::Intensifier, tiers.intensifier),
    ] {
        for def in defs {
            let phrase = def.phrase.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
            let invalid = |message: &str| LexiconError::InvalidQuantifier {
                phrase: def.phrase.clone(),
                message: message.to_string(),
            };
            if phrase.is_empty() {
                return Err(invalid("phrase must not be empty"));
            }
            if def.magnitude < 1 {
                return Err(invalid("magnitude must be positive"));
            }
            if def.lower < 1 || def.lower > def.upper {
                return Err(invalid("multipliers must satisfy 1 <= lower <= upper"));
            }
            def.magnitude
                .checked_mul(def.upper)
                .ok_or_else(|| invalid("magnitude * upper overflows"))?;
            entries.push(QuantifierEntry {
                phrase,
                tier,
                magnitude: def.magnitude,
                lower: def.lower,
                upper: def.upper,
            });
        }
    }
    entries.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then_with(|| b.phrase.len().cmp(&a.phrase.len()))
            .then_with(|| a.phrase.cmp(&b.phrase))
    });
    entries.dedup_by(|a, b| a.phrase == b.phrase);
    Ok(entries)
}
