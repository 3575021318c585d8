//! Sound inference rules.
//!
//! Every rule is parametrised by the formula it eliminates.
//! Applying a rule to a knowledge base yields the conclusions
//! if its premises are in the knowledge base, and nothing otherwise.

use crate::{Error, Formula};
use alloc::vec::Vec;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Rule {
    /// `a`, `a ⇒ b` ⊢ `b`
    ModusPonens(Formula),
    /// `a₁ ∧ … ∧ aₙ` ⊢ `a₁`, …, `aₙ`
    AndElimination(Formula),
    /// `¬¬a` ⊢ `a`
    DoubleNegationElimination(Formula),
    /// `a`, `a ⇒ b` ⊢ `b ∨ ¬a`
    ImplicationElimination(Formula),
    /// `a ⇔ b` ⊢ `(a ⇒ b) ∧ (b ⇒ a)`
    BiconditionalElimination(Formula),
    /// `a ∧ (b₁ ∨ … ∨ bₙ)` ⊢ `(a ∧ b₁) ∨ … ∨ (a ∧ bₙ)` and
    /// `a ∨ (b₁ ∧ … ∧ bₙ)` ⊢ `(a ∨ b₁) ∧ … ∧ (a ∨ bₙ)`
    Distribution(Formula),
    /// `¬(a₁ ∧ … ∧ aₙ)` ⊢ `¬a₁ ∨ … ∨ ¬aₙ` and
    /// `¬(a₁ ∨ … ∨ aₙ)` ⊢ `¬a₁ ∧ … ∧ ¬aₙ`
    DeMorgan(Formula),
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.name(), self.premise())
    }
}

impl Rule {
    pub fn name(&self) -> &'static str {
        use Rule::*;
        match self {
            ModusPonens(_) => "Modus Ponens",
            AndElimination(_) => "And Elimination",
            DoubleNegationElimination(_) => "Double Negation Elimination",
            ImplicationElimination(_) => "Implication Elimination",
            BiconditionalElimination(_) => "Biconditional Elimination",
            Distribution(_) => "Distribution",
            DeMorgan(_) => "De Morgan",
        }
    }

    /// The formula that the rule eliminates.
    pub fn premise(&self) -> &Formula {
        use Rule::*;
        match self {
            ModusPonens(fm)
            | AndElimination(fm)
            | DoubleNegationElimination(fm)
            | ImplicationElimination(fm)
            | BiconditionalElimination(fm)
            | Distribution(fm)
            | DeMorgan(fm) => fm,
        }
    }

    fn mismatch(&self) -> Error {
        Error::RuleApplication(self.name(), self.premise().clone())
    }

    /// Formulas derivable from the knowledge base in one step.
    ///
    /// Fails if the premise does not have the shape required by the rule.
    ///
    /// ~~~
    /// use proplog::{Formula, Rule};
    /// let (p, q) = (Formula::atom("P"), Formula::atom("Q"));
    /// let pq = Formula::imp(p.clone(), q.clone());
    /// let kb = [pq.clone(), p];
    /// assert_eq!(Rule::ModusPonens(pq.clone()).apply(&kb), Ok(vec![q]));
    /// assert_eq!(Rule::ModusPonens(pq).apply(&[]), Ok(vec![]));
    /// ~~~
    pub fn apply(&self, kb: &[Formula]) -> Result<Vec<Formula>, Error> {
        use Formula::*;
        let premise = self.premise();
        let shaped = match (self, premise) {
            (Rule::ModusPonens(_), Implies(..))
            | (Rule::AndElimination(_), And(_))
            | (Rule::ImplicationElimination(_), Implies(..))
            | (Rule::BiconditionalElimination(_), Biconditional(..)) => true,
            (Rule::DoubleNegationElimination(_), Not(fm)) => matches!(**fm, Not(_)),
            (Rule::DeMorgan(_), Not(fm)) => matches!(**fm, And(_) | Or(_)),
            (Rule::Distribution(_), And(fms)) => fms.len() == 2 && matches!(fms[1], Or(_)),
            (Rule::Distribution(_), Or(fms)) => fms.len() == 2 && matches!(fms[1], And(_)),
            _ => false,
        };
        if !shaped {
            return Err(self.mismatch());
        }
        if !kb.contains(premise) {
            return Ok(Vec::new());
        }

        Ok(match (self, premise) {
            (Rule::ModusPonens(_), Implies(a, b)) if kb.contains(a) => Vec::from([*b.clone()]),
            (Rule::ImplicationElimination(_), Implies(a, b)) if kb.contains(a) => {
                Vec::from([*b.clone() | -*a.clone()])
            }
            (Rule::AndElimination(_), And(fms)) => fms.to_vec(),
            (Rule::DoubleNegationElimination(_), Not(fm)) => match &**fm {
                Not(a) => Vec::from([*a.clone()]),
                _ => return Err(self.mismatch()),
            },
            (Rule::BiconditionalElimination(_), Biconditional(a, b)) => {
                let (a, b) = (*a.clone(), *b.clone());
                Vec::from([Formula::imp(a.clone(), b.clone()) & Formula::imp(b, a)])
            }
            (Rule::Distribution(_), And(_)) => Vec::from([premise.clone().distribute().1]),
            (Rule::Distribution(_), Or(_)) => Vec::from([premise.clone().distribute_disj().1]),
            (Rule::DeMorgan(_), Not(_)) => Vec::from([premise.clone().unfold_neg().1]),
            _ => Vec::new(),
        })
    }
}
