//! Extraction results and inputs.

use serde::{Deserialize, Serialize};

use super::Number;

/// How an extraction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// One of the strategies produced one or two numbers.
    Success,
    /// The input matched a zero phrase ("none reported").
    RecognizedZero,
    /// The input matched an unknown/negligible phrase ("unknown").
    RecognizedUnknown,
    /// No strategy could extract a number.
    ParseFailure,
}

/// A normalized `(min, max, is_approximate)` range.
///
/// When both bounds are present, `min <= max`. `approximate` is `None` only
/// for [`Outcome::ParseFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityResult {
    pub min: Option<Number>,
    pub max: Option<Number>,
    pub approximate: Option<bool>,
    pub outcome: Outcome,
}

impl QuantityResult {
    /// A single exact value, `(n, n, false)`.
    pub fn exact(n: Number) -> Self {
        Self::range(n, n, false)
    }

    /// A range; bounds are sorted so that `min <= max`.
    pub fn range(a: Number, b: Number, approximate: bool) -> Self {
        let (a, b) = (a.normalized(), b.normalized());
        let (min, max) = if a.total_cmp(&b).is_le() { (a, b) } else { (b, a) };
        Self {
            min: Some(min),
            max: Some(max),
            approximate: Some(approximate),
            outcome: Outcome::Success,
        }
    }

    /// `(0, 0, false)`.
    pub fn zero() -> Self {
        Self {
            min: Some(Number::Int(0)),
            max: Some(Number::Int(0)),
            approximate: Some(false),
            outcome: Outcome::RecognizedZero,
        }
    }

    /// Recognized but unquantifiable: `(None, None, approximate)`.
    pub fn unknown(approximate: bool) -> Self {
        Self {
            min: None,
            max: None,
            approximate: Some(approximate),
            outcome: Outcome::RecognizedUnknown,
        }
    }

    /// `(None, None, None)`.
    pub fn failure() -> Self {
        Self {
            min: None,
            max: None,
            approximate: None,
            outcome: Outcome::ParseFailure,
        }
    }

    pub fn as_tuple(&self) -> (Option<Number>, Option<Number>, Option<bool>) {
        (self.min, self.max, self.approximate)
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// What callers hand to the engine: free text or an already-numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantityInput<'a> {
    Text(&'a str),
    Int(i64),
    Float(f64),
}

impl<'a> From<&'a str> for QuantityInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for QuantityInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<i64> for QuantityInput<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for QuantityInput<'_> {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<u32> for QuantityInput<'_> {
    fn from(value: u32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for QuantityInput<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_sorts_bounds() {
        let r = QuantityResult::range(Number::Int(352), Number::Int(110), true);
        assert_eq!(r.as_tuple(), (Some(Number::Int(110)), Some(Number::Int(352)), Some(true)));
    }

    #[test]
    fn test_failure_has_no_flag() {
        let r = QuantityResult::failure();
        assert_eq!(r.as_tuple(), (None, None, None));
        assert_eq!(r.outcome, Outcome::ParseFailure);
    }

    #[test]
    fn test_serializes_as_plain_numbers() {
        let r = QuantityResult::range(Number::Float(2_400.0), Number::Int(7_200), true);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"min":2400,"max":7200,"approximate":true,"outcome":"success"}"#
        );
    }
}
