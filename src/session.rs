//! Consultations: the suspend-and-resume protocol around the resolver.
//!
//! The resolver never blocks waiting for input. When it cannot determine a
//! goal it names one missing proposition; a [`Consultation`] carries that
//! question to the caller, records the answer into the knowledge base, and
//! re-invokes resolution for the same top-level goal. Because facts only
//! grow between passes, each round either concludes the goal or asks about
//! a strictly different proposition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ExecutionError;
use crate::fact::Overlay;
use crate::inference::{InferenceMethod, Resolution};
use crate::kb::KnowledgeBase;
use crate::symbol::Symbol;

/// One answered question in a consultation's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    /// The proposition that was asked about.
    pub symbol: Symbol,

    /// The answer that was committed as a fact.
    pub value: bool,

    /// When the answer was recorded.
    pub answered_at: DateTime<Utc>,
}

/// Outcome of one [`Consultation::advance`] pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ConsultationStep {
    /// The goal was resolved. The overlay is returned for replay/display;
    /// its facts are already committed to the knowledge base.
    Concluded {
        /// The goal's truth value.
        value: bool,
        /// Facts derived during the final pass, in derivation order.
        derived: Overlay,
    },

    /// Resolution is suspended on one missing proposition. Obtain its
    /// value out of band and supply it via [`Consultation::answer`].
    AwaitingFact {
        /// The proposition to ask about.
        symbol: Symbol,
    },
}

/// Drives repeated resolution of one goal against a [`KnowledgeBase`].
///
/// # Examples
///
/// ```
/// use entail::{ConsultationStep, InferenceMethod, KnowledgeBase, Symbol};
///
/// let mut kb = KnowledgeBase::new();
/// let rain = Symbol::new("rain")?;
/// let wet = Symbol::new("wet")?;
/// kb.add_rule(vec![rain.clone()], wet.clone())?;
///
/// let mut consultation = kb.consult(wet, InferenceMethod::Ponens);
/// let step = consultation.advance(&mut kb);
/// assert_eq!(step, ConsultationStep::AwaitingFact { symbol: rain });
///
/// consultation.answer(&mut kb, true)?;
/// let step = consultation.advance(&mut kb);
/// assert!(matches!(step, ConsultationStep::Concluded { value: true, .. }));
/// # Ok::<(), entail::EntailError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    goal: Symbol,
    method: InferenceMethod,
    pending: Option<Symbol>,
    log: Vec<AnsweredQuestion>,
}

impl Consultation {
    /// Creates a consultation for `goal` using `method`.
    #[must_use]
    pub fn new(goal: Symbol, method: InferenceMethod) -> Self {
        Self {
            goal,
            method,
            pending: None,
            log: Vec::new(),
        }
    }

    /// The goal under consultation.
    #[must_use]
    pub fn goal(&self) -> &Symbol {
        &self.goal
    }

    /// The inference method in use.
    #[must_use]
    pub fn method(&self) -> InferenceMethod {
        self.method
    }

    /// The question currently awaiting an answer, if any.
    #[must_use]
    pub fn pending_question(&self) -> Option<&Symbol> {
        self.pending.as_ref()
    }

    /// Answered questions, oldest first.
    #[must_use]
    pub fn log(&self) -> &[AnsweredQuestion] {
        &self.log
    }

    /// Runs one resolution pass for the goal.
    ///
    /// Whatever the pass derived is committed into `kb`'s fact table, so
    /// later passes and consultations start from everything learned here.
    /// On conclusion the pending question clears; otherwise the missing
    /// proposition becomes the pending question.
    pub fn advance(&mut self, kb: &mut KnowledgeBase) -> ConsultationStep {
        let result = kb.resolve(&self.goal, self.method);
        kb.facts_mut().absorb(&result.derived);
        match result.resolution {
            Resolution::Resolved { value } => {
                self.pending = None;
                ConsultationStep::Concluded {
                    value,
                    derived: result.derived,
                }
            }
            Resolution::Unresolved { missing } => {
                self.pending = Some(missing.clone());
                ConsultationStep::AwaitingFact { symbol: missing }
            }
        }
    }

    /// Commits an answer for the pending question as a fact in `kb` and
    /// logs it. The next [`Consultation::advance`] re-resolves the goal.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::NoPendingQuestion`] if nothing is awaited.
    pub fn answer(&mut self, kb: &mut KnowledgeBase, value: bool) -> Result<(), ExecutionError> {
        let Some(symbol) = self.pending.take() else {
            return Err(ExecutionError::NoPendingQuestion);
        };
        kb.set_fact(symbol.clone(), value);
        self.log.push(AnsweredQuestion {
            symbol,
            value,
            answered_at: Utc::now(),
        });
        Ok(())
    }
}
