//! Implication rules.
//!
//! A [`Rule`] states that the conjunction of its premises implies its
//! conclusion. Several rules may share a conclusion; each is an independent
//! sufficient condition (logical OR between rules). Rules are immutable
//! once constructed except through [`Rule::with_premise`] and
//! [`Rule::reversed`], both of which preserve the construction invariants.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ExecutionError, ValidationError};
use crate::symbol::Symbol;

/// Stable identifier for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(Uuid);

impl RuleId {
    /// Creates a new random rule ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RuleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An implication: premises (conjunction) ⟹ conclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Rule identifier.
    pub id: RuleId,

    /// Premise propositions, all of which must hold. Non-empty,
    /// deduplicated, order-preserving.
    premises: Vec<Symbol>,

    /// The proposition this rule derives.
    conclusion: Symbol,
}

impl Rule {
    /// Construct a validated rule.
    ///
    /// Duplicate premises are ignored (first occurrence wins).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyPremises`] if `premises` is empty.
    pub fn new(premises: Vec<Symbol>, conclusion: Symbol) -> Result<Self, ValidationError> {
        if premises.is_empty() {
            return Err(ValidationError::EmptyPremises {
                conclusion: conclusion.as_str().to_string(),
            });
        }

        let mut deduped: Vec<Symbol> = Vec::with_capacity(premises.len());
        for premise in premises {
            if !deduped.contains(&premise) {
                deduped.push(premise);
            }
        }

        Ok(Self {
            id: RuleId::new(),
            premises: deduped,
            conclusion,
        })
    }

    /// Construct a direct implication (single premise).
    ///
    /// # Errors
    ///
    /// Never fails for non-empty symbols; present for parity with
    /// [`Rule::new`] so callers handle one error shape.
    pub fn direct(premise: Symbol, conclusion: Symbol) -> Result<Self, ValidationError> {
        Self::new(vec![premise], conclusion)
    }

    /// The premises, in declaration order.
    #[must_use]
    pub fn premises(&self) -> &[Symbol] {
        &self.premises
    }

    /// The conclusion.
    #[must_use]
    pub fn conclusion(&self) -> &Symbol {
        &self.conclusion
    }

    /// Whether `symbol` appears among the premises.
    #[must_use]
    pub fn has_premise(&self, symbol: &Symbol) -> bool {
        self.premises.contains(symbol)
    }

    /// Returns a copy of this rule with `premise` added to the conjunction.
    ///
    /// Adding a premise that is already present returns the rule unchanged.
    /// The rule ID is preserved.
    #[must_use]
    pub fn with_premise(mut self, premise: Symbol) -> Self {
        if !self.premises.contains(&premise) {
            self.premises.push(premise);
        }
        self
    }

    /// Returns this rule with its direction reversed.
    ///
    /// Only direct implications can be reversed: `A ⟹ B` becomes `B ⟹ A`.
    /// The rule ID is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::RuleNotReversible`] if the rule has more
    /// than one premise (reversal would have to discard premises).
    pub fn reversed(self) -> Result<Self, ExecutionError> {
        if self.premises.len() != 1 {
            return Err(ExecutionError::RuleNotReversible {
                id: self.id,
                premise_count: self.premises.len(),
            });
        }
        let Self {
            id,
            mut premises,
            conclusion,
        } = self;
        let premise = premises.pop().unwrap_or_else(|| conclusion.clone());
        Ok(Self {
            id,
            premises: vec![conclusion],
            conclusion: premise,
        })
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawRule {
            id: RuleId,
            premises: Vec<Symbol>,
            conclusion: Symbol,
        }

        let raw = RawRule::deserialize(deserializer)?;
        let mut rule =
            Rule::new(raw.premises, raw.conclusion).map_err(serde::de::Error::custom)?;
        rule.id = raw.id;
        Ok(rule)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for premise in &self.premises {
            if !first {
                write!(f, " AND ")?;
            }
            write!(f, "{premise}")?;
            first = false;
        }
        write!(f, " => {}", self.conclusion)
    }
}
