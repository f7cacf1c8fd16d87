//! Locale-aware numeric parsing: "3,600" -> 3600, "2.5" -> 2.5 (and the
//! reverse conventions when the locale swaps separators).

use quantex_core::config::Locale;
use quantex_core::Number;

#[derive(Debug, Clone)]
pub struct LocaleNumberParser {
    locale: Locale,
}

impl LocaleNumberParser {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Parse a whole string as a number. Thousands separators are dropped,
    /// at most one decimal separator is allowed, anything else fails.
    pub fn parse(&self, text: &str) -> Option<Number> {
        let text = text.trim();
        let (negative, body) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let decimal = self.locale.decimal_separator();
        let thousands = self.locale.thousands_separator();
        let mut normalized = String::with_capacity(body.len() + 1);
        if negative {
            normalized.push('-');
        }
        let mut digits = 0usize;
        let mut seen_decimal = false;
        for c in body.chars() {
            if c.is_ascii_digit() {
                digits += 1;
                normalized.push(c);
            } else if c == decimal && !seen_decimal {
                seen_decimal = true;
                normalized.push('.');
            } else if c == thousands && !seen_decimal {
                continue;
            } else {
                return None;
            }
        }
        if digits == 0 {
            return None;
        }

        if seen_decimal {
            normalized.parse::<f64>().ok().filter(|f| f.is_finite()).map(Number::Float)
        } else {
            match normalized.parse::<i64>() {
                Ok(i) => Some(Number::Int(i)),
                Err(_) => normalized
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(Number::Float),
            }
        }
    }
}
