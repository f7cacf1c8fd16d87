//! Approximation classification.

pub mod approximation;

pub use approximation::{ApproxReason, ApproxVerdict, ApproximationClassifier};
