//! The inference layer.
//!
//! [`resolve`] is the reasoning core: a pure, recursive, cycle-safe
//! evaluator that determines a goal proposition's truth value from a rule
//! set and a fact table, or reports the one missing proposition that blocks
//! it. [`InferenceMethod`] selects the chaining strategy.

mod method;
mod resolver;

pub use method::{InferenceMethod, Strategy};
pub use resolver::{resolve, InferenceResult, Resolution};
