//! Fact storage.
//!
//! [`FactTable`] is the persistent store of known proposition truth values.
//! Absence means unknown; there is no third truth value. [`Overlay`] holds
//! the facts derived during a single resolution call, in derivation order,
//! and is committed into a table only by the caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Persistent store of known proposition truth values.
///
/// The resolver treats a table as read-only; it only grows between
/// resolution passes, via caller insertions or [`FactTable::absorb`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactTable {
    facts: HashMap<Symbol, bool>,
}

impl FactTable {
    /// Creates an empty fact table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a proposition's truth value, replacing any previous value.
    pub fn insert(&mut self, symbol: Symbol, value: bool) {
        self.facts.insert(symbol, value);
    }

    /// Looks up a proposition. `None` means unknown.
    #[must_use]
    pub fn get(&self, symbol: &Symbol) -> Option<bool> {
        self.facts.get(symbol).copied()
    }

    /// Whether the proposition has a known value.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.facts.contains_key(symbol)
    }

    /// Forgets a proposition's value, returning it if it was known.
    pub fn remove(&mut self, symbol: &Symbol) -> Option<bool> {
        self.facts.remove(symbol)
    }

    /// Number of known facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether nothing is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.facts.clear();
    }

    /// Iterates over known facts in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, bool)> {
        self.facts.iter().map(|(s, v)| (s, *v))
    }

    /// Commits every fact in `overlay` into this table, in derivation order.
    pub fn absorb(&mut self, overlay: &Overlay) {
        for (symbol, value) in overlay.iter() {
            self.facts.insert(symbol.clone(), value);
        }
    }
}

/// Facts derived during one resolution call, in derivation order.
///
/// The order matters to callers that replay derivations for display: a
/// derived goal always appears after the facts that supported it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(Symbol, bool)>", into = "Vec<(Symbol, bool)>")]
pub struct Overlay {
    order: Vec<Symbol>,
    values: HashMap<Symbol, bool>,
}

impl Overlay {
    /// Creates an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a derived fact. Re-deriving a symbol keeps its original
    /// position and overwrites the value.
    pub fn insert(&mut self, symbol: Symbol, value: bool) {
        if !self.values.contains_key(&symbol) {
            self.order.push(symbol.clone());
        }
        self.values.insert(symbol, value);
    }

    /// Looks up a derived fact.
    #[must_use]
    pub fn get(&self, symbol: &Symbol) -> Option<bool> {
        self.values.get(symbol).copied()
    }

    /// Number of derived facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over derived facts in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, bool)> {
        self.order.iter().map(|s| (s, self.values[s]))
    }
}

impl From<Vec<(Symbol, bool)>> for Overlay {
    fn from(pairs: Vec<(Symbol, bool)>) -> Self {
        let mut overlay = Self::new();
        for (symbol, value) in pairs {
            overlay.insert(symbol, value);
        }
        overlay
    }
}

impl From<Overlay> for Vec<(Symbol, bool)> {
    fn from(overlay: Overlay) -> Self {
        overlay
            .order
            .iter()
            .map(|s| (s.clone(), overlay.values[s]))
            .collect()
    }
}
