//! Annotation data: tokens with part-of-speech tags, and labeled entity spans.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Adjective,
    /// Superlative adjective or adverb ("least", "most", "highest").
    Superlative,
    Adposition,
    Adverb,
    Auxiliary,
    Conjunction,
    Determiner,
    Noun,
    Numeral,
    Particle,
    Pronoun,
    ProperNoun,
    Punctuation,
    Symbol,
    Verb,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Whitespace following the token in the source text.
    pub whitespace: String,
    pub pos: PosTag,
    /// Digits, or a number word.
    pub like_num: bool,
}

impl Token {
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn is_digits(&self) -> bool {
        self.text.chars().next().is_some_and(|c| c.is_ascii_digit())
    }
}

/// Entity labels the annotator can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Cardinal,
    Money,
    Quantity,
    Percent,
    Date,
}

impl EntityLabel {
    /// Labels the extraction facade looks at when the caller names none.
    pub const DEFAULT_NUMERIC: [EntityLabel; 3] = [Self::Cardinal, Self::Money, Self::Quantity];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cardinal => "CARDINAL",
            Self::Money => "MONEY",
            Self::Quantity => "QUANTITY",
            Self::Percent => "PERCENT",
            Self::Date => "DATE",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CARDINAL" => Ok(Self::Cardinal),
            "MONEY" => Ok(Self::Money),
            "QUANTITY" => Ok(Self::Quantity),
            "PERCENT" => Ok(Self::Percent),
            "DATE" => Ok(Self::Date),
            other => Err(format!("unknown entity label '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: EntityLabel,
    /// Byte offsets into the annotated text.
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// Index of the first token in the span.
    pub first_token: usize,
    /// Index one past the last token in the span.
    pub last_token: usize,
}

/// Tokens and entities of one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub tokens: Vec<Token>,
    pub entities: Vec<EntitySpan>,
}

impl Annotation {
    pub fn tags(&self) -> Vec<PosTag> {
        self.tokens.iter().map(|t| t.pos).collect()
    }

    /// Entities whose label is in `labels`.
    pub fn entities_with<'a>(
        &'a self,
        labels: &'a [EntityLabel],
    ) -> impl Iterator<Item = &'a EntitySpan> + 'a {
        self.entities.iter().filter(move |e| labels.contains(&e.label))
    }

    /// Source text of tokens `[from, to)`, joined with their original whitespace.
    pub fn span_text(&self, from: usize, to: usize) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens[from..to].iter().enumerate() {
            out.push_str(&token.text);
            if from + i + 1 < to {
                out.push_str(&token.whitespace);
            }
        }
        out
    }
}

/// A linguistic annotator: tokenization, part-of-speech tags, and entities.
pub trait Annotator: Send + Sync {
    fn name(&self) -> &str;

    fn annotate(&self, text: &str) -> Annotation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_label_parses_case_insensitively() {
        assert_eq!("money".parse::<EntityLabel>(), Ok(EntityLabel::Money));
        assert_eq!(" CARDINAL ".parse::<EntityLabel>(), Ok(EntityLabel::Cardinal));
        assert!("LOC".parse::<EntityLabel>().is_err());
    }

    #[test]
    fn test_entity_label_serializes_uppercase() {
        let json = serde_json::to_string(&EntityLabel::Quantity).unwrap();
        assert_eq!(json, "\"QUANTITY\"");
    }
}
