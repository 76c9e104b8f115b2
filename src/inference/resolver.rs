//! The goal resolver.
//!
//! Recursive depth-first evaluation of a goal proposition against a rule
//! set and a fact table. Facts derived along the way accumulate in an
//! [`Overlay`] shared by the whole call tree, so sibling subgoals see each
//! other's derivations. Cycle protection uses a visited set that is cloned
//! for every recursive descent: a guard tripped on one path never poisons
//! an unrelated sibling path.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::fact::{FactTable, Overlay};
use crate::inference::method::{InferenceMethod, Strategy};
use crate::rule::Rule;
use crate::symbol::Symbol;

/// Outcome of a resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Resolution {
    /// The goal was determined to be true or false.
    Resolved {
        /// The goal's truth value.
        value: bool,
    },

    /// The goal could not be determined. Supplying `missing` as a fact and
    /// re-invoking may let resolution proceed.
    Unresolved {
        /// The first proposition whose value was needed but unavailable,
        /// in rule-iteration and ponens-before-tollens order; the goal
        /// itself when no rule mentions it.
        missing: Symbol,
    },
}

/// Result of one top-level [`resolve`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceResult {
    /// Whether and how the goal was resolved.
    pub resolution: Resolution,

    /// Facts derived during this call, in derivation order. Never committed
    /// by the resolver; the caller decides whether to absorb them.
    pub derived: Overlay,
}

impl InferenceResult {
    /// The resolved value, if any.
    #[must_use]
    pub fn value(&self) -> Option<bool> {
        match &self.resolution {
            Resolution::Resolved { value } => Some(*value),
            Resolution::Unresolved { .. } => None,
        }
    }

    /// The missing proposition, if unresolved.
    #[must_use]
    pub fn missing(&self) -> Option<&Symbol> {
        match &self.resolution {
            Resolution::Resolved { .. } => None,
            Resolution::Unresolved { missing } => Some(missing),
        }
    }
}

/// Internal evaluation outcome.
///
/// `Open(None)` marks a cycle-guarded path: it contributes no answer and
/// no question, but does not poison sibling paths.
enum Eval {
    Known(bool),
    Open(Option<Symbol>),
}

/// Determine the truth value of `goal` from `rules` and `facts`.
///
/// The rule set and fact table are read-only; everything derived lands in
/// the returned overlay. The resolver is total: malformed rule graphs
/// (cycles, self-implications) terminate with an unresolved result rather
/// than erroring or recursing forever.
///
/// # Examples
///
/// ```
/// use entail::{resolve, FactTable, InferenceMethod, Rule, Symbol};
///
/// let rain = Symbol::new("rain")?;
/// let wet = Symbol::new("wet")?;
/// let rules = vec![Rule::direct(rain.clone(), wet.clone())?];
///
/// let mut facts = FactTable::new();
/// facts.insert(rain, true);
///
/// let result = resolve(&wet, &rules, &facts, InferenceMethod::Automatic);
/// assert_eq!(result.value(), Some(true));
/// # Ok::<(), entail::ValidationError>(())
/// ```
#[must_use]
pub fn resolve(
    goal: &Symbol,
    rules: &[Rule],
    facts: &FactTable,
    method: InferenceMethod,
) -> InferenceResult {
    let mut overlay = Overlay::new();
    let visited = HashSet::new();
    let resolution = match evaluate(goal, rules, facts, method, &mut overlay, &visited) {
        Eval::Known(value) => Resolution::Resolved { value },
        // The root call starts with an empty visited set, so its Open
        // always carries a symbol.
        Eval::Open(missing) => Resolution::Unresolved {
            missing: missing.unwrap_or_else(|| goal.clone()),
        },
    };
    InferenceResult {
        resolution,
        derived: overlay,
    }
}

fn evaluate(
    goal: &Symbol,
    rules: &[Rule],
    facts: &FactTable,
    method: InferenceMethod,
    overlay: &mut Overlay,
    visited: &HashSet<Symbol>,
) -> Eval {
    // Derived facts shadow nothing: a symbol is never in both stores with
    // different values, because the overlay is only written for symbols
    // the fact table does not know.
    if let Some(value) = overlay.get(goal).or_else(|| facts.get(goal)) {
        return Eval::Known(value);
    }

    if visited.contains(goal) {
        return Eval::Open(None);
    }
    let mut visited = visited.clone();
    visited.insert(goal.clone());

    // The visited set extended with `goal` is shared across the strategy
    // fallthrough below; each recursive descent gets its own clone.
    let mut first_missing: Option<Symbol> = None;

    for strategy in method.strategies() {
        match strategy {
            Strategy::Ponens => {
                for rule in rules.iter().filter(|r| r.conclusion() == goal) {
                    let mut all_premises_true = true;

                    for premise in rule.premises() {
                        match evaluate(premise, rules, facts, method, overlay, &visited) {
                            Eval::Known(true) => {}
                            Eval::Known(false) => {
                                all_premises_true = false;
                                break;
                            }
                            Eval::Open(missing) => {
                                all_premises_true = false;
                                if first_missing.is_none() {
                                    first_missing =
                                        Some(missing.unwrap_or_else(|| premise.clone()));
                                }
                                break;
                            }
                        }
                    }

                    if all_premises_true {
                        overlay.insert(goal.clone(), true);
                        return Eval::Known(true);
                    }
                }
            }
            Strategy::Tollens => {
                for rule in rules.iter().filter(|r| r.has_premise(goal)) {
                    let conclusion = rule.conclusion();
                    match evaluate(conclusion, rules, facts, method, overlay, &visited) {
                        Eval::Open(missing) => {
                            if first_missing.is_none() {
                                first_missing = Some(missing.unwrap_or_else(|| conclusion.clone()));
                            }
                            continue;
                        }
                        // A true conclusion constrains no individual premise.
                        Eval::Known(true) => continue,
                        Eval::Known(false) => {}
                    }

                    let mut other_premises_true = true;
                    for premise in rule.premises().iter().filter(|p| *p != goal) {
                        match evaluate(premise, rules, facts, method, overlay, &visited) {
                            Eval::Known(true) => {}
                            // A false other-premise already disproves the
                            // rule; nothing to ask about.
                            Eval::Known(false) => {
                                other_premises_true = false;
                                break;
                            }
                            Eval::Open(missing) => {
                                other_premises_true = false;
                                if first_missing.is_none() {
                                    first_missing =
                                        Some(missing.unwrap_or_else(|| premise.clone()));
                                }
                                break;
                            }
                        }
                    }

                    if other_premises_true {
                        // Contrapositive: conclusion false and every other
                        // conjunct true, so this premise must be the false one.
                        overlay.insert(goal.clone(), false);
                        return Eval::Known(false);
                    }
                }
            }
        }
    }

    Eval::Open(Some(first_missing.unwrap_or_else(|| goal.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Symbol {
        Symbol::new(name).unwrap()
    }

    fn rule(premises: &[&str], conclusion: &str) -> Rule {
        Rule::new(
            premises.iter().map(|p| sym(p)).collect(),
            sym(conclusion),
        )
        .unwrap()
    }

    fn facts(entries: &[(&str, bool)]) -> FactTable {
        let mut table = FactTable::new();
        for (name, value) in entries {
            table.insert(sym(name), *value);
        }
        table
    }

    #[test]
    fn known_goal_short_circuits_with_empty_overlay() {
        let rules = vec![rule(&["A"], "C")];
        let table = facts(&[("C", false), ("A", true)]);

        let result = resolve(&sym("C"), &rules, &table, InferenceMethod::Automatic);
        assert_eq!(result.value(), Some(false));
        assert!(result.derived.is_empty());
    }

    #[test]
    fn ponens_derives_conclusion_from_true_premises() {
        let rules = vec![rule(&["A", "B"], "C")];
        let table = facts(&[("A", true), ("B", true)]);

        let result = resolve(&sym("C"), &rules, &table, InferenceMethod::Ponens);
        assert_eq!(result.value(), Some(true));
        assert_eq!(result.derived.get(&sym("C")), Some(true));
    }

    #[test]
    fn ponens_fails_on_false_premise_without_asking() {
        let rules = vec![rule(&["A", "B"], "C")];
        let table = facts(&[("A", true), ("B", false)]);

        let result = resolve(&sym("C"), &rules, &table, InferenceMethod::Ponens);
        // The one applicable rule is disproved, so the goal itself is the
        // only thing left to ask about.
        assert_eq!(result.missing(), Some(&sym("C")));
        assert!(result.derived.is_empty());
    }

    #[test]
    fn ponens_reports_first_unknown_premise() {
        let rules = vec![rule(&["A", "B"], "C")];
        let table = facts(&[("A", true)]);

        let result = resolve(&sym("C"), &rules, &table, InferenceMethod::Ponens);
        assert_eq!(result.missing(), Some(&sym("B")));
    }

    #[test]
    fn tollens_derives_contrapositive() {
        let rules = vec![rule(&["A", "B"], "C")];
        let table = facts(&[("C", false), ("A", true)]);

        let result = resolve(&sym("B"), &rules, &table, InferenceMethod::Tollens);
        assert_eq!(result.value(), Some(false));
        assert_eq!(result.derived.get(&sym("B")), Some(false));
    }

    #[test]
    fn tollens_gives_nothing_from_true_conclusion() {
        let rules = vec![rule(&["A", "B"], "C")];
        let table = facts(&[("C", true), ("A", true)]);

        let result = resolve(&sym("B"), &rules, &table, InferenceMethod::Tollens);
        assert_eq!(result.missing(), Some(&sym("B")));
    }

    #[test]
    fn tollens_skips_rule_with_false_other_premise() {
        // C is false but A is false too, so nothing follows about B and the
        // false premise A must not be surfaced as a question.
        let rules = vec![rule(&["A", "B"], "C")];
        let table = facts(&[("C", false), ("A", false)]);

        let result = resolve(&sym("B"), &rules, &table, InferenceMethod::Tollens);
        assert_eq!(result.missing(), Some(&sym("B")));
    }

    #[test]
    fn or_semantics_across_rules_sharing_a_conclusion() {
        let rules = vec![rule(&["A"], "C"), rule(&["B"], "C")];
        let table = facts(&[("A", false), ("B", true)]);

        let result = resolve(&sym("C"), &rules, &table, InferenceMethod::Automatic);
        assert_eq!(result.value(), Some(true));
    }

    #[test]
    fn automatic_falls_through_to_tollens() {
        // No rule concludes B, so ponens has nothing; tollens fires.
        let rules = vec![rule(&["A", "B"], "C")];
        let table = facts(&[("C", false), ("A", true)]);

        let result = resolve(&sym("B"), &rules, &table, InferenceMethod::Automatic);
        assert_eq!(result.value(), Some(false));
    }

    #[test]
    fn cycle_terminates_unresolved() {
        let rules = vec![rule(&["X"], "Y"), rule(&["Y"], "X")];
        let table = FactTable::new();

        let result = resolve(&sym("X"), &rules, &table, InferenceMethod::Automatic);
        assert!(result.value().is_none());
    }

    #[test]
    fn self_implication_terminates() {
        let rules = vec![rule(&["X"], "X")];
        let table = FactTable::new();

        let result = resolve(&sym("X"), &rules, &table, InferenceMethod::Automatic);
        assert_eq!(result.missing(), Some(&sym("X")));
    }

    #[test]
    fn cycle_guard_does_not_poison_sibling_branches() {
        // P is reachable twice: through the cyclic branch and directly.
        // The direct branch must still be evaluated.
        let rules = vec![
            rule(&["GOAL"], "LOOP"),
            rule(&["LOOP", "P"], "GOAL"),
            rule(&["P"], "GOAL"),
        ];
        let table = facts(&[("P", true)]);

        let result = resolve(&sym("GOAL"), &rules, &table, InferenceMethod::Ponens);
        assert_eq!(result.value(), Some(true));
    }

    #[test]
    fn unmentioned_goal_is_itself_the_missing_node() {
        let rules = vec![rule(&["A"], "C")];
        let table = FactTable::new();

        let result = resolve(&sym("Z"), &rules, &table, InferenceMethod::Automatic);
        assert_eq!(result.missing(), Some(&sym("Z")));
        assert!(result.derived.is_empty());
    }

    #[test]
    fn missing_node_precedence_is_stable() {
        // Several candidate questions compete; the first unknown premise of
        // the first applicable rule wins, every time.
        let rules = vec![
            rule(&["P1", "P2"], "GOAL"),
            rule(&["Q1"], "GOAL"),
            rule(&["GOAL", "R1"], "CONC"),
        ];
        let table = facts(&[("CONC", false)]);

        for _ in 0..4 {
            let result = resolve(&sym("GOAL"), &rules, &table, InferenceMethod::Ponens);
            assert_eq!(result.missing(), Some(&sym("P1")));
        }
    }

    #[test]
    fn automatic_asks_about_the_conclusion_of_a_direct_rule() {
        // Forward chaining alone would ask about RAIN, but under automatic
        // the leaf premise's tollens lookback re-enters the rule, hits the
        // visited guard on WET, and surfaces WET as the question.
        let rules = vec![rule(&["RAIN"], "WET")];
        let table = FactTable::new();

        let result = resolve(&sym("WET"), &rules, &table, InferenceMethod::Ponens);
        assert_eq!(result.missing(), Some(&sym("RAIN")));

        let result = resolve(&sym("WET"), &rules, &table, InferenceMethod::Automatic);
        assert_eq!(result.missing(), Some(&sym("WET")));
    }

    #[test]
    fn automatic_missing_node_is_stable_across_runs() {
        // Under automatic, a leaf premise's own tollens lookback walks back
        // into the enclosing rule and surfaces its conclusion as the
        // question. Whatever is picked must be picked every time.
        let rules = vec![
            rule(&["P1", "P2"], "GOAL"),
            rule(&["Q1"], "GOAL"),
            rule(&["GOAL", "R1"], "CONC"),
        ];
        let table = facts(&[("CONC", false)]);

        let first = resolve(&sym("GOAL"), &rules, &table, InferenceMethod::Automatic);
        assert!(first.value().is_none());
        for _ in 0..4 {
            let again = resolve(&sym("GOAL"), &rules, &table, InferenceMethod::Automatic);
            assert_eq!(again, first);
        }
    }

    #[test]
    fn sibling_subgoals_share_derivations() {
        // Both branches of M's rule derive through C; the second branch
        // must see the first branch's derivation in the overlay rather
        // than re-deriving it.
        let rules = vec![
            rule(&["A"], "C"),
            rule(&["C"], "K"),
            rule(&["C"], "L"),
            rule(&["K", "L"], "M"),
        ];
        let table = facts(&[("A", true)]);

        let result = resolve(&sym("M"), &rules, &table, InferenceMethod::Automatic);
        assert_eq!(result.value(), Some(true));

        let order: Vec<_> = result.derived.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(order, ["C", "K", "L", "M"]);
    }

    #[test]
    fn determinism_for_fixed_inputs() {
        let rules = vec![
            rule(&["A", "B"], "C"),
            rule(&["D", "E", "F"], "G"),
            rule(&["C"], "K"),
            rule(&["G"], "K"),
        ];
        let table = facts(&[("A", true), ("B", true), ("D", true), ("E", true), ("F", true)]);

        let first = resolve(&sym("K"), &rules, &table, InferenceMethod::Automatic);
        for _ in 0..4 {
            let again = resolve(&sym("K"), &rules, &table, InferenceMethod::Automatic);
            assert_eq!(again, first);
        }
    }

    #[test]
    fn resolver_leaves_inputs_untouched() {
        let rules = vec![rule(&["A"], "C")];
        let table = facts(&[("A", true)]);
        let before = table.clone();

        let result = resolve(&sym("C"), &rules, &table, InferenceMethod::Automatic);
        assert_eq!(result.value(), Some(true));
        assert_eq!(table, before);
    }
}
