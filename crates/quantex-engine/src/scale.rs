//! Order-of-magnitude inference: the step used to widen a number into a range.
//!
//! 3600 -> 100, 30 -> 10, 7 -> 1, 2.5 -> 0.1, 0 -> 1.

use quantex_core::Number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Step size: a power of ten.
    pub step: Number,
    /// Decimal places of the input. Bounds derived from a float are rounded to this.
    pub precision: u32,
}

pub fn infer_scale(value: Number) -> Scale {
    match value.normalized() {
        Number::Int(i) => {
            let mut magnitude = i.unsigned_abs();
            let mut step: i64 = 1;
            if magnitude != 0 {
                while magnitude % 10 == 0 {
                    magnitude /= 10;
                    step = step.saturating_mul(10);
                }
            }
            Scale {
                step: Number::Int(step),
                precision: 0,
            }
        }
        Number::Float(f) => {
            let precision = decimal_places(f);
            Scale {
                step: Number::Float(10f64.powi(-(precision as i32))),
                precision,
            }
        }
    }
}

/// Digits after the decimal point in the shortest round-tripping rendering.
fn decimal_places(f: f64) -> u32 {
    let rendered = format!("{f}");
    rendered
        .split_once('.')
        .map_or(0, |(_, frac)| frac.len() as u32)
}
