//! Prover results in the SZS ontology used by TPTP tools.

use core::fmt::{self, Debug, Display};
pub use NoSuccessKind::*;
pub use SuccessKind::*;

pub struct Status<K>(pub K);

impl<K: Debug> Display for Status<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% SZS status {:?}", self.0)
    }
}

pub struct Output<O>(pub O);

impl<O: Display> Display for Output<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% SZS output start")?;
        writeln!(f, "{}", self.0)?;
        writeln!(f, "% SZS output end")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SuccessKind {
    /// the axioms entail the conjecture
    Theorem,
    /// some model of the axioms falsifies the conjecture
    CounterSatisfiable,
    /// the axioms without conjecture have no model
    Unsatisfiable,
    /// the axioms without conjecture have a model
    Satisfiable,
}

impl SuccessKind {
    /// Status of an entailment check, depending on whether a conjecture was given.
    pub fn of_entailment(entailed: bool, conjecture: bool) -> Self {
        match (entailed, conjecture) {
            (true, true) => Theorem,
            (false, true) => CounterSatisfiable,
            (true, false) => Unsatisfiable,
            (false, false) => Satisfiable,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoSuccessKind {
    OsError,
    InputError,
    SyntaxError,
    /// the problem is not propositional
    Inappropriate,
    /// the step limit was exhausted
    ResourceOut,
    /// the search ended without a decision
    GaveUp,
}
