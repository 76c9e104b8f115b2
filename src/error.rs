//! Error types for entail.
//!
//! All errors are strongly typed using thiserror. Note that the inference
//! resolver itself is total: every outcome of a resolution attempt is
//! expressed in [`crate::Resolution`], never as an error. The types here
//! cover construction-time validation and knowledge-base/consultation
//! misuse only.

use thiserror::Error;

use crate::rule::RuleId;

/// Validation errors that occur when constructing symbols and rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A proposition name was empty (or whitespace only).
    #[error("Proposition name cannot be empty")]
    EmptySymbol,

    /// A rule was constructed with no premises.
    #[error("Rule concluding '{conclusion}' has no premises")]
    EmptyPremises {
        /// The conclusion the malformed rule was supposed to derive.
        conclusion: String,
    },
}

/// Execution errors for knowledge-base and consultation operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecutionError {
    /// Rule not found in the knowledge base.
    #[error("Rule not found: {id}")]
    RuleNotFound {
        /// The missing rule's identifier.
        id: RuleId,
    },

    /// A rule with more than one premise cannot have its direction reversed.
    #[error("Rule {id} has {premise_count} premises and cannot be reversed")]
    RuleNotReversible {
        /// The rule's identifier.
        id: RuleId,
        /// How many premises it carries.
        premise_count: usize,
    },

    /// An answer was supplied while no question was pending.
    #[error("Consultation has no pending question to answer")]
    NoPendingQuestion,
}

/// Top-level error type for entail.
#[derive(Debug, Error)]
pub enum EntailError {
    /// Input validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A knowledge-base or consultation operation failed.
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),
}

/// Convenience result alias for fallible entail operations.
pub type EntailResult<T> = Result<T, EntailError>;
