//! Conversion towards conjunctive normal form.
//!
//! [`to_cnf`] performs a single rewrite of every top-level formula,
//! without descending into subformulas.
//! [`Formula::cnf`] computes a complete conjunctive normal form.

use crate::change::{self, Change};
use crate::{Formula, Operands};
use alloc::vec::Vec;
use log::debug;

type Rewrite = fn(Formula) -> (Change, Formula);

/// Rules of the single rewrite pass, in the order they are tried.
const PASS: [Rewrite; 4] = [
    Formula::unfold_iff,
    Formula::unfold_impl,
    Formula::unfold_neg,
    Formula::distribute,
];

impl Formula {
    /// Unfold `a ⇔ b` to `(a ⇒ b) ∧ (b ⇒ a)`.
    pub fn unfold_iff(self) -> (Change, Self) {
        match self {
            Self::Biconditional(l, r) => (true, Self::imp(*l.clone(), *r.clone()) & Self::imp(*r, *l)),
            x => (false, x),
        }
    }

    /// Unfold `a ⇒ b` to `¬a ∨ b`.
    pub fn unfold_impl(self) -> (Change, Self) {
        match self {
            Self::Implies(l, r) => (true, -*l | *r),
            x => (false, x),
        }
    }

    /// Unfold `a ⊕ b` to `(a ∨ b) ∧ (¬a ∨ ¬b)`.
    pub fn unfold_xor(self) -> (Change, Self) {
        match self {
            Self::Xor(l, r) => (true, (*l.clone() | *r.clone()) & (-*l | -*r)),
            x => (false, x),
        }
    }

    /// Push a negation into a conjunction or disjunction (De Morgan).
    pub fn unfold_neg(self) -> (Change, Self) {
        use Formula::*;
        match self {
            Not(x) => match *x {
                And(fms) => (true, Or(fms.map(|fm| -fm))),
                Or(fms) => (true, And(fms.map(|fm| -fm))),
                x => (false, -x),
            },
            x => (false, x),
        }
    }

    /// Unfold `¬¬a` to `a`.
    pub fn unfold_dneg(self) -> (Change, Self) {
        match self {
            Self::Not(x) => match *x {
                Self::Not(t) => (true, *t),
                x => (false, -x),
            },
            x => (false, x),
        }
    }

    /// Distribute `a ∧ (b₁ ∨ … ∨ bₙ)` to `(a ∧ b₁) ∨ … ∨ (a ∧ bₙ)`.
    pub fn distribute(self) -> (Change, Self) {
        match self {
            Self::And(fms) => match <[Self; 2]>::try_from(fms.into_vec()) {
                Ok([a, Self::Or(bs)]) => (true, Self::Or(bs.map(|b| a.clone() & b))),
                Ok([a, b]) => (false, a & b),
                Err(fms) => (false, Self::And(Operands(fms))),
            },
            x => (false, x),
        }
    }

    /// Distribute `a ∨ (b₁ ∧ … ∧ bₙ)` to `(a ∨ b₁) ∧ … ∧ (a ∨ bₙ)`.
    pub fn distribute_disj(self) -> (Change, Self) {
        match self {
            Self::Or(fms) => match <[Self; 2]>::try_from(fms.into_vec()) {
                Ok([a, Self::And(bs)]) => (true, Self::And(bs.map(|b| a.clone() | b))),
                Ok([a, b]) => (false, a | b),
                Err(fms) => (false, Self::Or(Operands(fms))),
            },
            x => (false, x),
        }
    }

    /// Rewrite the formula with the first applicable rule of the single pass.
    pub fn cnf_step(self) -> (Change, Self) {
        change::first(self, &PASS)
    }

    /// Apply a change function to the formula and then recursively to its subformulas.
    pub fn fix(self, f: &impl Fn(Self) -> (Change, Self)) -> Self {
        change::fix(self, f).map_form(|fm| fm.fix(f))
    }

    /// Formula with only atoms, negations, conjunctions and disjunctions.
    pub fn unfold_connectives(self) -> Self {
        let unfolds: [Rewrite; 3] = [Self::unfold_iff, Self::unfold_impl, Self::unfold_xor];
        self.fix(&|fm| change::first(fm, &unfolds))
    }

    /// Negation normal form of a formula without `⇒`, `⇔` and `⊕`.
    pub fn nnf(self) -> Self {
        let unfolds: [Rewrite; 2] = [Self::unfold_dneg, Self::unfold_neg];
        self.fix(&|fm| change::first(fm, &unfolds))
    }

    /// CNF of the disjunction of two CNF formulas.
    fn cnf_of_disj(l: Self, r: Self) -> Self {
        use Formula::*;
        match (l, r) {
            (And(lc), r) => And(lc.map(|ln| Self::cnf_of_disj(ln, r.clone()))),
            (l, And(rc)) => And(rc.map(|rn| Self::cnf_of_disj(l.clone(), rn))),
            (a, b) => Self::disj(a, b),
        }
    }

    fn cnf_of_nnf(self) -> Self {
        use Formula::*;
        match self {
            And(fms) => And(fms.map(|fm| fm.cnf_of_nnf())),
            Or(fms) => {
                let (first, rest) = fms.split_first();
                let first = first.cnf_of_nnf();
                rest.into_iter()
                    .fold(first, |acc, x| Self::cnf_of_disj(acc, x.cnf_of_nnf()))
            }
            lit => lit,
        }
    }

    /// Conjunctive normal form.
    ///
    /// ~~~
    /// use proplog::Formula;
    /// let (p, q, r) = (Formula::atom("P"), Formula::atom("Q"), Formula::atom("R"));
    /// let fm = p.clone() | (q.clone() & r.clone());
    /// assert_eq!(fm.cnf(), (p.clone() | q) & (p | r));
    /// ~~~
    pub fn cnf(self) -> Self {
        self.unfold_connectives().nnf().cnf_of_nnf()
    }

    /// Split nested conjunctions into their conjuncts.
    pub fn conjuncts(self) -> Vec<Self> {
        match self {
            Self::And(fms) => fms.into_iter().flat_map(|fm| fm.conjuncts()).collect(),
            fm => Vec::from([fm]),
        }
    }

    /// Clauses of the conjunctive normal form.
    pub fn clauses(self) -> Vec<Self> {
        self.cnf().conjuncts()
    }
}

/// Rewrite every formula once with the first applicable rule.
///
/// | formula       | result                   |
/// | ------------- | ------------------------ |
/// | `a ⇔ b`       | `(a ⇒ b) ∧ (b ⇒ a)`      |
/// | `a ⇒ b`       | `¬a ∨ b`                 |
/// | `¬(a ∧ b)`    | `¬a ∨ ¬b`                |
/// | `¬(a ∨ b)`    | `¬a ∧ ¬b`                |
/// | `a ∧ (b ∨ c)` | `(a ∧ b) ∨ (a ∧ c)`      |
///
/// Other formulas, in particular clauses, are returned unchanged.
pub fn to_cnf(kb: &[Formula]) -> Vec<Formula> {
    kb.iter().cloned().map(|fm| fm.cnf_step().1).collect()
}

/// Repeat the single rewrite pass until no rule applies,
/// splitting top-level conjunctions into separate formulas before every pass.
///
/// Because conjunctions are split first, distribution never applies here.
pub fn clausify(kb: Vec<Formula>) -> Vec<Formula> {
    change::fix(kb, |kb| {
        let len = kb.len();
        let kb: Vec<_> = kb.into_iter().flat_map(|fm| fm.conjuncts()).collect();
        let split = kb.len() != len;
        let (rewritten, kb) = change::map_all(kb, Formula::cnf_step);
        let change = split || rewritten;
        if change {
            debug!("pass yields {} formulas", kb.len());
        }
        (change, kb)
    })
}

/// Replace formulas by the clauses of their conjunctive normal form.
pub fn clauses(kb: Vec<Formula>) -> Vec<Formula> {
    kb.into_iter().flat_map(|fm| fm.clauses()).collect()
}
