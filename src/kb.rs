//! The knowledge base.
//!
//! [`KnowledgeBase`] is the persistent state a rule-authoring tool keeps
//! around the resolver: the rule set and the fact table, with add / remove /
//! replace operations for both. The resolver itself never touches this
//! state; [`KnowledgeBase::resolve`] hands it read-only snapshots.

use serde::{Deserialize, Serialize};

use crate::error::{ExecutionError, ValidationError};
use crate::fact::FactTable;
use crate::inference::{resolve, InferenceMethod, InferenceResult};
use crate::rule::{Rule, RuleId};
use crate::session::Consultation;
use crate::symbol::Symbol;

/// Rules and facts, maintained across resolution passes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    rules: Vec<Rule>,
    facts: FactTable,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a validated rule; premises form a conjunction.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyPremises`] if `premises` is empty.
    pub fn add_rule(
        &mut self,
        premises: Vec<Symbol>,
        conclusion: Symbol,
    ) -> Result<RuleId, ValidationError> {
        let rule = Rule::new(premises, conclusion)?;
        let id = rule.id;
        self.rules.push(rule);
        Ok(id)
    }

    /// Adds a premise to an existing rule's conjunction.
    ///
    /// Duplicate premises are ignored. This is the "AND" alternative to
    /// adding a second rule for the same conclusion (which would be "OR").
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::RuleNotFound`] for an unknown id.
    pub fn add_premise(&mut self, id: RuleId, premise: Symbol) -> Result<(), ExecutionError> {
        let Some(position) = self.rules.iter().position(|r| r.id == id) else {
            return Err(ExecutionError::RuleNotFound { id });
        };
        self.rules[position] = self.rules[position].clone().with_premise(premise);
        Ok(())
    }

    /// Reverses a direct implication in place: `A ⟹ B` becomes `B ⟹ A`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::RuleNotFound`] for an unknown id, or
    /// [`ExecutionError::RuleNotReversible`] if the rule has more than one
    /// premise.
    pub fn reverse_rule(&mut self, id: RuleId) -> Result<(), ExecutionError> {
        let Some(position) = self.rules.iter().position(|r| r.id == id) else {
            return Err(ExecutionError::RuleNotFound { id });
        };
        let reversed = self.rules[position].clone().reversed()?;
        self.rules[position] = reversed;
        Ok(())
    }

    /// Removes a rule.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::RuleNotFound`] for an unknown id.
    pub fn remove_rule(&mut self, id: RuleId) -> Result<Rule, ExecutionError> {
        let Some(position) = self.rules.iter().position(|r| r.id == id) else {
            return Err(ExecutionError::RuleNotFound { id });
        };
        Ok(self.rules.remove(position))
    }

    /// Looks up a rule by id.
    #[must_use]
    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// All rules, in insertion order. This is the order the resolver
    /// iterates them in.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Sets a proposition's truth value.
    pub fn set_fact(&mut self, symbol: Symbol, value: bool) {
        self.facts.insert(symbol, value);
    }

    /// Forgets a proposition's value, returning it if it was known.
    pub fn retract_fact(&mut self, symbol: &Symbol) -> Option<bool> {
        self.facts.remove(symbol)
    }

    /// Looks up a proposition. `None` means unknown.
    #[must_use]
    pub fn fact(&self, symbol: &Symbol) -> Option<bool> {
        self.facts.get(symbol)
    }

    /// The fact table.
    #[must_use]
    pub fn facts(&self) -> &FactTable {
        &self.facts
    }

    /// Mutable access to the fact table.
    pub fn facts_mut(&mut self) -> &mut FactTable {
        &mut self.facts
    }

    /// Removes all rules and facts.
    pub fn clear(&mut self) {
        self.rules.clear();
        self.facts.clear();
    }

    /// Resolves `goal` against the current rules and facts.
    ///
    /// Pure dispatch to [`resolve`]: derived facts are returned in the
    /// result's overlay, never committed here.
    #[must_use]
    pub fn resolve(&self, goal: &Symbol, method: InferenceMethod) -> InferenceResult {
        resolve(goal, &self.rules, &self.facts, method)
    }

    /// Begins a consultation: repeated resolution of `goal`, suspending on
    /// missing facts until the external caller answers them.
    #[must_use]
    pub fn consult(&self, goal: Symbol, method: InferenceMethod) -> Consultation {
        Consultation::new(goal, method)
    }
}
