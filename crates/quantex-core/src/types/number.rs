//! Numeric values produced by extraction.
//!
//! Counts are integers almost everywhere; decimals only appear for inputs
//! like "2.5" and for bounds derived from them. Keeping both variants lets
//! integer arithmetic stay exact.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Largest float magnitude that still converts losslessly into `i64` range.
const I64_SAFE_BOUND: f64 = 9.2e18;

/// An extracted number: exact integer or float.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Numeric value as `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(f) => f.is_finite(),
        }
    }

    /// A float holding a whole value becomes an `Int`.
    pub fn normalized(self) -> Self {
        match self {
            Self::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < I64_SAFE_BOUND => {
                Self::Int(f as i64)
            }
            other => other,
        }
    }

    /// `max(0, n)`.
    pub fn clamp_non_negative(self) -> Self {
        match self {
            Self::Int(i) => Self::Int(i.max(0)),
            Self::Float(f) => Self::Float(f.max(0.0)),
        }
    }

    /// Round a float to `decimals` places. Integers are unchanged.
    pub fn round_to(self, decimals: u32) -> Self {
        match self {
            Self::Int(_) => self,
            Self::Float(f) => {
                let factor = 10f64.powi(decimals as i32);
                Self::Float((f * factor).round() / factor)
            }
        }
    }

    /// Total order over numeric values, usable for sorting.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (a, b) => a.as_f64().total_cmp(&b.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a.saturating_add(b)),
            (a, b) => Self::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a.saturating_sub(b)),
            (a, b) => Self::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a.saturating_mul(b)),
            (a, b) => Self::Float(a.as_f64() * b.as_f64()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_float_normalizes_to_int() {
        assert!(matches!(Number::Float(2_500_000.0).normalized(), Number::Int(2_500_000)));
        assert!(matches!(Number::Float(2.5).normalized(), Number::Float(_)));
        assert!(matches!(Number::Float(f64::NAN).normalized(), Number::Float(_)));
    }

    #[test]
    fn test_int_arithmetic_stays_int() {
        assert!(matches!(Number::Int(7) * Number::Int(3), Number::Int(21)));
        assert!(matches!(Number::Int(7) - Number::Int(9), Number::Int(-2)));
        assert!(matches!(Number::Int(1) + Number::Float(0.5), Number::Float(_)));
    }

    #[test]
    fn test_mixed_equality_is_numeric() {
        assert_eq!(Number::Int(3), Number::Float(3.0));
        assert_ne!(Number::Int(3), Number::Float(3.1));
    }

    #[test]
    fn test_round_to_trims_float_noise() {
        let n = (Number::Float(2.5) - Number::Float(0.1)).round_to(1);
        assert_eq!(n, Number::Float(2.4));
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(Number::Int(-4).clamp_non_negative(), Number::Int(0));
        assert_eq!(Number::Float(-0.5).clamp_non_negative(), Number::Float(0.0));
    }

    #[test]
    fn test_saturating_overflow() {
        assert_eq!(Number::Int(i64::MAX) + Number::Int(1), Number::Int(i64::MAX));
    }
}
