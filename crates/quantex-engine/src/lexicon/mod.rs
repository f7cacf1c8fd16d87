//! Phrase lexicon: versioned TOML tables, loaded once and compiled for matching.

pub mod compiled;
pub mod loader;
pub mod matcher;
pub mod table;
pub mod types;

pub use compiled::{BoundPattern, CompiledLexicon, QuantifierPattern, NUMBER_PATTERN};
pub use loader::BUILTIN_LANGUAGES;
pub use matcher::{PhraseMatch, PhraseMatcher};
pub use table::Lexicon;
pub use types::{
    BoundKind, FamilyModifier, PhraseCategory, QuantifierEntry, QuantifierTier, ScaleWord,
};
