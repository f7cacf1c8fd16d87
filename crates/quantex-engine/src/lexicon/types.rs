//! Lexicon data types: phrase categories, scale words, family modifier, quantifiers.

use quantex_core::Number;
use serde::{Deserialize, Serialize};

/// Named phrase categories. Every category a strategy consults lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseCategory {
    Zero,
    Unknown,
    Approximately,
    Over,
    OverInclusive,
    Under,
    UnderInclusive,
    Exactly,
    ScaleWord,
    FamilySynonym,
    QuantifierPhrase,
}

impl PhraseCategory {
    pub const ALL: [PhraseCategory; 11] = [
        Self::Zero,
        Self::Unknown,
        Self::Approximately,
        Self::Over,
        Self::OverInclusive,
        Self::Under,
        Self::UnderInclusive,
        Self::Exactly,
        Self::ScaleWord,
        Self::FamilySynonym,
        Self::QuantifierPhrase,
    ];

    /// Categories that turn a number into a one-sided or approximate range,
    /// in matching priority order.
    pub const BOUNDING: [PhraseCategory; 5] = [
        Self::Approximately,
        Self::OverInclusive,
        Self::UnderInclusive,
        Self::Over,
        Self::Under,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Unknown => "unknown",
            Self::Approximately => "approximately",
            Self::Over => "over",
            Self::OverInclusive => "over_inclusive",
            Self::Under => "under",
            Self::UnderInclusive => "under_inclusive",
            Self::Exactly => "exactly",
            Self::ScaleWord => "scale_word",
            Self::FamilySynonym => "family_synonym",
            Self::QuantifierPhrase => "quantifier_phrase",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == s)
    }

    /// Shape of the range a bounding phrase produces.
    pub fn bound_kind(&self) -> Option<BoundKind> {
        match self {
            Self::Approximately => Some(BoundKind::Around),
            Self::Over => Some(BoundKind::Above { inclusive: false }),
            Self::OverInclusive => Some(BoundKind::Above { inclusive: true }),
            Self::Under => Some(BoundKind::Below { inclusive: false }),
            Self::UnderInclusive => Some(BoundKind::Below { inclusive: true }),
            _ => None,
        }
    }
}

/// How a bounding phrase widens a number into a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    /// `n ± scale`.
    Around,
    /// Everything from `n` upward by one scale step.
    Above { inclusive: bool },
    /// Everything from `n` downward by one scale step.
    Below { inclusive: bool },
}

/// A magnitude word such as "million" or "lakh".
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleWord {
    pub word: String,
    pub value: i64,
    /// Regional words (lakh, crore) are only recognized in shorthand fallback.
    pub regional: bool,
}

/// Multiplier applied when the text counts families or households.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyModifier {
    pub lower: i64,
    pub upper: i64,
    pub synonyms: Vec<String>,
}

impl FamilyModifier {
    pub fn factors(&self) -> (Number, Number) {
        (Number::Int(self.lower), Number::Int(self.upper))
    }
}

/// Priority tier of a quantifier phrase. Lower tiers are tried first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuantifierTier {
    /// "dozens of hundreds", "a couple of hundred".
    Compound,
    /// "a few hundred", "a dozen".
    Single,
    /// "several", "many".
    Intensifier,
}

/// A vague-quantity phrase and the range it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantifierEntry {
    pub phrase: String,
    pub tier: QuantifierTier,
    pub magnitude: i64,
    pub lower: i64,
    pub upper: i64,
}

impl QuantifierEntry {
    /// `(magnitude * lower, magnitude * upper)`.
    pub fn range(&self) -> (Number, Number) {
        let magnitude = Number::Int(self.magnitude);
        (
            magnitude * Number::Int(self.lower),
            magnitude * Number::Int(self.upper),
        )
    }
}
