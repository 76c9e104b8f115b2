//! # Entail - rule-based boolean inference
//!
//! Entail determines the truth value of a goal proposition from a knowledge
//! base of implication rules and a partial set of known facts. It resolves
//! recursively with cycle protection, chains forward (modus ponens) and
//! backward (modus tollens), and when it cannot conclude anything it names
//! the one missing proposition that would let resolution continue.
//!
//! ## Core Concepts
//!
//! - **Symbol**: a named boolean proposition; absence from the fact table
//!   means unknown
//! - **Rule**: a conjunction of premises implying one conclusion; rules
//!   sharing a conclusion are independent sufficient conditions
//! - **Resolution**: resolved true/false, or unresolved with a missing
//!   proposition plus an overlay of facts derived along the way
//! - **Consultation**: the suspend-and-resume loop that asks an external
//!   source for missing facts and re-resolves
//!
//! ## Usage
//!
//! ```rust
//! use entail::{ConsultationStep, InferenceMethod, KnowledgeBase, Symbol};
//!
//! let mut kb = KnowledgeBase::new();
//! let raining = Symbol::new("raining")?;
//! let street_wet = Symbol::new("street_wet")?;
//! kb.add_rule(vec![raining.clone()], street_wet.clone())?;
//!
//! let mut consultation = kb.consult(street_wet, InferenceMethod::Ponens);
//!
//! // Nothing is known yet, so forward chaining asks about the premise.
//! let step = consultation.advance(&mut kb);
//! assert_eq!(step, ConsultationStep::AwaitingFact { symbol: raining });
//!
//! consultation.answer(&mut kb, true)?;
//! let step = consultation.advance(&mut kb);
//! assert!(matches!(step, ConsultationStep::Concluded { value: true, .. }));
//! # Ok::<(), entail::EntailError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core types
pub mod error;
pub mod fact;
pub mod rule;
pub mod symbol;

// The reasoning core and the state around it
pub mod inference;
pub mod kb;
pub mod session;

// Re-export primary types at crate root for convenience
pub use error::{EntailError, EntailResult, ExecutionError, ValidationError};
pub use fact::{FactTable, Overlay};
pub use inference::{resolve, InferenceMethod, InferenceResult, Resolution, Strategy};
pub use kb::KnowledgeBase;
pub use rule::{Rule, RuleId};
pub use session::{AnsweredQuestion, Consultation, ConsultationStep};
pub use symbol::Symbol;
