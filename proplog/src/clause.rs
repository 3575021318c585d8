use crate::{Formula, Operands};
use alloc::{vec, vec::Vec};
use core::fmt::{self, Display};

/// Disjunction of literals, where the empty clause stands for falsity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clause(Vec<Formula>);

impl Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(lit) = iter.next() {
            write!(f, "{}", lit)?;
            for lit in iter {
                write!(f, " ∨ {}", lit)?;
            }
        } else {
            write!(f, "⊥")?
        }
        Ok(())
    }
}

impl core::ops::Deref for Clause {
    type Target = Vec<Formula>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Formula;
    type IntoIter = core::slice::Iter<'a, Formula>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Clause {
    type Item = Formula;
    type IntoIter = vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl core::iter::FromIterator<Formula> for Clause {
    fn from_iter<I: IntoIterator<Item = Formula>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The operands of a disjunction, or the formula itself otherwise.
impl From<&Formula> for Clause {
    fn from(fm: &Formula) -> Self {
        match fm {
            Formula::Or(fms) => Self(fms.to_vec()),
            fm => Self(Vec::from([fm.clone()])),
        }
    }
}

impl Clause {
    /// Return whether a clause contains both some literal and its negation.
    pub fn is_trivial(&self) -> bool {
        self.iter().any(|l1| self.iter().any(|l2| l1.is_complement(l2)))
    }

    /// Resolve on the first literal of `self` whose complement occurs in `other`.
    ///
    /// All occurrences of the two complementary literals are removed,
    /// and the remaining literals are sorted without duplicates.
    pub fn resolve(&self, other: &Self) -> Option<Self> {
        let (l1, l2) = self
            .iter()
            .find_map(|l1| Some((l1, other.iter().find(|l2| l1.is_complement(l2))?)))?;
        let rest1 = self.iter().filter(|l| *l != l1);
        let rest2 = other.iter().filter(|l| *l != l2);
        let mut lits: Vec<_> = rest1.chain(rest2).cloned().collect();
        lits.sort();
        lits.dedup();
        Some(Self(lits))
    }

    /// Convert to a formula, returning `None` for the empty clause.
    pub fn into_formula(self) -> Option<Formula> {
        let mut lits = self.0;
        match lits.len() {
            0 => None,
            1 => lits.pop(),
            _ => Some(Formula::Or(Operands(lits))),
        }
    }
}
