//! Whitespace- and punctuation-aware tokenizer that keeps byte offsets.

use super::types::{PosTag, Token};

/// Split `text` into tokens.
///
/// Digit runs keep internal `.`/`,` groups ("3,600", "2.5"), words keep
/// internal hyphens and apostrophes ("twenty-three", "don't"), and
/// `>=`, `<=`, `+/-` stay whole. Everything else is one token per character.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |(b, _)| *b);
    let mut tokens: Vec<Token> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        if c.is_whitespace() {
            let mut j = i;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            if let Some(last) = tokens.last_mut() {
                last.whitespace = text[start..byte_at(j)].to_string();
            }
            i = j;
            continue;
        }

        let char_at = |k: usize| chars.get(k).map(|(_, ch)| *ch);
        let mut j = i + 1;
        if c.is_ascii_digit() {
            while let Some(ch) = char_at(j) {
                if ch.is_ascii_digit() {
                    j += 1;
                } else if matches!(ch, '.' | ',') && char_at(j + 1).is_some_and(|n| n.is_ascii_digit()) {
                    j += 2;
                } else {
                    break;
                }
            }
        } else if c.is_alphabetic() {
            while let Some(ch) = char_at(j) {
                if ch.is_alphabetic() {
                    j += 1;
                } else if matches!(ch, '-' | '\'' | '’') && char_at(j + 1).is_some_and(char::is_alphabetic) {
                    j += 2;
                } else {
                    break;
                }
            }
        } else if matches!((c, char_at(j)), ('>' | '<', Some('='))) {
            j += 1;
        } else if c == '+' && char_at(j) == Some('/') && char_at(j + 1) == Some('-') {
            j += 2;
        }

        let end = byte_at(j);
        tokens.push(Token {
            text: text[start..end].to_string(),
            start,
            end,
            whitespace: String::new(),
            pos: PosTag::Other,
            like_num: false,
        });
        i = j;
    }

    tokens
}
