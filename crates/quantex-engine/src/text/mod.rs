//! Text utilities: preprocessing, currency markers, locale numbers, number words.

pub mod currency;
pub mod locale;
pub mod preprocess;
pub mod words;

pub use currency::{CurrencyValidator, Iso4217};
pub use locale::LocaleNumberParser;
pub use preprocess::Preprocessor;
pub use words::{EnglishNumberWords, WordNumberConverter};
