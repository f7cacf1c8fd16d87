//! Core value types shared by the engine and its callers.

pub mod number;
pub mod quantity;

pub use number::Number;
pub use quantity::{Outcome, QuantityInput, QuantityResult};
