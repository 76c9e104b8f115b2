//! Inference method selection.

use serde::{Deserialize, Serialize};

/// A single chaining strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Forward chaining: all premises true ⟹ conclusion true.
    Ponens,

    /// Backward chaining: conclusion false and all other premises true ⟹
    /// the remaining premise is false.
    Tollens,
}

/// How the resolver chooses between chaining strategies.
///
/// Strategies are *pure* and deterministic, so a resolution result can be
/// reproduced given the same goal, rules, and facts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceMethod {
    /// Use only modus ponens.
    Ponens,

    /// Use only modus tollens.
    Tollens,

    /// Try ponens first, then tollens, for every goal encountered,
    /// including recursively. The first strategy to resolve a goal wins;
    /// results are never blended.
    #[default]
    Automatic,
}

impl InferenceMethod {
    /// The ordered strategies this method attempts.
    #[must_use]
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            Self::Ponens => &[Strategy::Ponens],
            Self::Tollens => &[Strategy::Tollens],
            Self::Automatic => &[Strategy::Ponens, Strategy::Tollens],
        }
    }

    /// Returns a short stable identifier suitable for logging/debugging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ponens => "ponens",
            Self::Tollens => "tollens",
            Self::Automatic => "automatic",
        }
    }
}
