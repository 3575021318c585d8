//! Entailment by refutation with propositional resolution.
//!
//! The negated query is added to the knowledge base, and
//! resolvents of clause pairs are derived until either
//! the empty clause or a fixpoint is reached.

use crate::{cnf, Budget, Clause, Error, Formula};
use alloc::{string::String, vec::Vec};
use core::fmt::{self, Display};
use log::{debug, info};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Outcome of resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofResult {
    /// The empty clause was derived.
    Contradiction,
    /// No new clause can be derived; contains the final clause set.
    Saturated(Vec<Formula>),
}

/// Result of resolving two clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolvent {
    /// the empty clause
    Empty,
    Clause(Formula),
}

/// Resolve two clauses on the first complementary pair of literals.
///
/// ~~~
/// use proplog::resolution::{resolve_pair, Resolvent};
/// use proplog::Formula;
/// let (p, q) = (Formula::atom("P"), Formula::atom("Q"));
/// let resolvent = resolve_pair(&(p.clone() | q.clone()), &-p.clone());
/// assert_eq!(resolvent, Some(Resolvent::Clause(q)));
/// assert_eq!(resolve_pair(&p, &-p.clone()), Some(Resolvent::Empty));
/// ~~~
pub fn resolve_pair(c1: &Formula, c2: &Formula) -> Option<Resolvent> {
    let clause = Clause::from(c1).resolve(&Clause::from(c2))?;
    Some(match clause.into_formula() {
        None => Resolvent::Empty,
        Some(fm) => Resolvent::Clause(fm),
    })
}

/// How a knowledge base is brought into clausal form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Normalizer {
    /// Repeat the single rewrite pass of [`cnf::to_cnf`] until nothing changes.
    ///
    /// This may leave formulas that are not clauses,
    /// in which case saturation does not imply non-entailment.
    Pass,
    /// Convert to complete conjunctive normal form.
    Full,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::Pass
    }
}

impl core::str::FromStr for Normalizer {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" => Ok(Self::Pass),
            "full" => Ok(Self::Full),
            _ => Err(alloc::format!("unknown normalizer: {}", s)),
        }
    }
}

impl Normalizer {
    pub fn normalize(self, kb: Vec<Formula>) -> Vec<Formula> {
        match self {
            Self::Pass => cnf::clausify(kb),
            Self::Full => cnf::clauses(kb),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Opt {
    /// maximal number of resolvents to compute
    pub lim: Option<usize>,
    pub normalizer: Normalizer,
}

/// Where a clause comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Origin {
    Input,
    /// resolvent of the clauses with the given indices
    Resolved(usize, usize),
}

pub struct Resolution {
    clauses: Vec<Formula>,
    origins: Vec<Origin>,
    refutation: Option<(usize, usize)>,
    budget: Budget,
}

impl Resolution {
    /// Prepare the refutation of `query` from a copy of `kb`.
    pub fn new(kb: &[Formula], query: &Formula, opt: &Opt) -> Self {
        let mut kb = kb.to_vec();
        kb.push(query.clone().complement());
        let clauses = opt.normalizer.normalize(kb);
        info!("{} input clauses", clauses.len());
        Self::from_clauses(clauses, opt.lim)
    }

    pub fn from_clauses(clauses: Vec<Formula>, lim: Option<usize>) -> Self {
        let mut uniq: Vec<Formula> = Vec::new();
        for cl in clauses {
            if !uniq.contains(&cl) {
                uniq.push(cl)
            }
        }
        Self {
            origins: uniq.iter().map(|_| Origin::Input).collect(),
            clauses: uniq,
            refutation: None,
            budget: Budget::new(lim),
        }
    }

    /// Derive resolvents until the empty clause is found or nothing new can be derived.
    ///
    /// After a new clause has been added, the search restarts from the first pair.
    /// Tautological resolvents are not added.
    pub fn run(&mut self) -> Result<ProofResult, Error> {
        'restart: loop {
            let len = self.clauses.len();
            for i in 0..len {
                for j in i + 1..len {
                    let resolvent = match resolve_pair(&self.clauses[i], &self.clauses[j]) {
                        Some(r) => r,
                        None => continue,
                    };
                    self.budget.spend()?;
                    match resolvent {
                        Resolvent::Empty => {
                            info!("contradiction after {} inferences", self.inferences());
                            self.refutation = Some((i, j));
                            return Ok(ProofResult::Contradiction);
                        }
                        Resolvent::Clause(cl) if Clause::from(&cl).is_trivial() => {
                            debug!("skip tautology {} from {} and {}", cl, i, j)
                        }
                        Resolvent::Clause(cl) if !self.clauses.contains(&cl) => {
                            debug!("{}: {} from {} and {}", len, cl, i, j);
                            self.clauses.push(cl);
                            self.origins.push(Origin::Resolved(i, j));
                            continue 'restart;
                        }
                        Resolvent::Clause(_) => (),
                    }
                }
            }
            info!("saturated with {} clauses", len);
            return Ok(ProofResult::Saturated(self.clauses.clone()));
        }
    }

    pub fn clauses(&self) -> &[Formula] {
        &self.clauses
    }

    /// Number of resolvents computed so far.
    pub fn inferences(&self) -> usize {
        self.budget.used()
    }

    /// Display the derivation of the clause set, ending with the empty clause if one was found.
    pub fn derivation(&self) -> Derivation<'_> {
        Derivation(self)
    }
}

pub struct Derivation<'a>(&'a Resolution);

impl<'a> Display for Derivation<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let res = self.0;
        for (n, (cl, origin)) in res.clauses.iter().zip(res.origins.iter()).enumerate() {
            match origin {
                Origin::Input => writeln!(f, "{}. {} [input]", n, cl)?,
                Origin::Resolved(i, j) => writeln!(f, "{}. {} [{}, {}]", n, cl, i, j)?,
            }
        }
        if let Some((i, j)) = res.refutation {
            writeln!(f, "{}. {} [{}, {}]", res.clauses.len(), Clause::default(), i, j)?;
        }
        Ok(())
    }
}

/// Return whether the knowledge base entails the query, by refutation.
///
/// ~~~
/// use proplog::{refute, Formula, ProofResult};
/// let (p, q) = (Formula::atom("P"), Formula::atom("Q"));
/// let kb = [Formula::imp(p.clone(), q.clone()), p];
/// assert_eq!(refute(&kb, &q), Ok(ProofResult::Contradiction));
/// ~~~
pub fn refute(kb: &[Formula], query: &Formula) -> Result<ProofResult, Error> {
    Resolution::new(kb, query, &Opt::default()).run()
}
