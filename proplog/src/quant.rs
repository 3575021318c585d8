//! Quantification over a fixed finite domain.
//!
//! A quantified statement about the entities of a domain is
//! replaced by the conjunction or disjunction of its instances,
//! where an entity having a property is the atom `<entity>_<predicate>`.

use crate::{Error, Formula, OpA};
use alloc::{format, vec::Vec};
use core::fmt::{self, Display};
use core::ops::Neg;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Quantifier {
    Forall,
    Exists,
}

impl Neg for Quantifier {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Forall => Self::Exists,
            Self::Exists => Self::Forall,
        }
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forall => write!(f, "∀"),
            Self::Exists => write!(f, "∃"),
        }
    }
}

/// Atom stating that an entity has a property.
///
/// ~~~
/// use proplog::{quant, Formula};
/// assert_eq!(quant::predicate("harry", "is_person"), Formula::atom("harry_is_person"));
/// ~~~
pub fn predicate(entity: &str, pred: &str) -> Formula {
    Formula::Atom(format!("{}_{}", entity, pred))
}

impl Quantifier {
    /// Connective that joins the instances of the quantified formula.
    pub fn connective(self) -> OpA {
        match self {
            Self::Forall => OpA::Conj,
            Self::Exists => OpA::Disj,
        }
    }

    /// Instantiate `body` for every entity of the domain and join the instances.
    ///
    /// A domain with a single entity yields its instance,
    /// and an empty domain yields [`Error::InvalidArity`].
    ///
    /// ~~~
    /// use proplog::quant::{predicate, Quantifier};
    /// let people = ["harry", "hermione"];
    /// let fm = Quantifier::Forall.flatten(people, |e| predicate(e, "is_person"));
    /// let expected = predicate("harry", "is_person") & predicate("hermione", "is_person");
    /// assert_eq!(fm, Ok(expected));
    /// ~~~
    pub fn flatten<'a, D, F>(self, domain: D, body: F) -> Result<Formula, Error>
    where
        D: IntoIterator<Item = &'a str>,
        F: Fn(&'a str) -> Formula,
    {
        let mut instances: Vec<_> = domain.into_iter().map(body).collect();
        if instances.len() == 1 {
            return instances.pop().ok_or(Error::InvalidArity(self.connective(), 0));
        }
        Formula::bina(self.connective(), instances)
    }

    /// Quantify a single predicate over the domain.
    pub fn over<'a>(
        self,
        domain: impl IntoIterator<Item = &'a str>,
        pred: &str,
    ) -> Result<Formula, Error> {
        self.flatten(domain, |entity| predicate(entity, pred))
    }
}
