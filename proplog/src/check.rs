//! Entailment by enumeration of all truth assignments.
//!
//! The number of models is exponential in the number of atoms,
//! which bounds the size of problems that can be checked in practice.
//! A [`Budget`] limits the number of models that are examined.

use crate::{satisfies, sorted_symbols, Budget, Error, Formula, Model};
use alloc::{string::ToString, vec, vec::Vec};
use core::fmt::{self, Display};
use core::iter::once;
use log::{debug, info, trace};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Iterator over all truth assignments to a sequence of atoms.
///
/// The first model assigns true to all atoms;
/// the last atom changes its value fastest.
pub struct Models<'a> {
    symbols: Vec<&'a str>,
    next: Option<Vec<bool>>,
}

impl<'a> Models<'a> {
    pub fn new(symbols: Vec<&'a str>) -> Self {
        let next = Some(vec![true; symbols.len()]);
        Self { symbols, next }
    }
}

impl<'a> Iterator for Models<'a> {
    type Item = Model;

    fn next(&mut self) -> Option<Model> {
        let mut values = self.next.take()?;
        let iter = self.symbols.iter().zip(values.iter());
        let model = iter.map(|(s, v)| (s.to_string(), *v)).collect();

        if let Some(i) = values.iter().rposition(|v| *v) {
            values[i] = false;
            values[i + 1..].iter_mut().for_each(|v| *v = true);
            self.next = Some(values);
        }
        Some(model)
    }
}

/// What a knowledge base tells about a query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Verdict {
    /// the query is entailed
    Yes,
    /// the negation of the query is entailed
    No,
    Maybe,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Yes => write!(f, "YES"),
            Verdict::No => write!(f, "NO"),
            Verdict::Maybe => write!(f, "MAYBE"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ModelChecker {
    budget: Budget,
}

impl ModelChecker {
    /// Create a model checker that examines at most `lim` models in total.
    pub fn new(lim: Option<usize>) -> Self {
        let budget = Budget::new(lim);
        Self { budget }
    }

    /// Number of models examined so far.
    pub fn models(&self) -> usize {
        self.budget.used()
    }

    /// Return a model that satisfies the knowledge base, but not the query.
    pub fn counter_model(&mut self, kb: &[Formula], query: &Formula) -> Result<Option<Model>, Error> {
        let symbols = sorted_symbols(kb.iter().chain(once(query)));
        info!("model checking over {} symbols", symbols.len());
        for model in Models::new(symbols) {
            self.budget.spend()?;
            if !satisfies(kb, &model)? {
                trace!("model falsifies knowledge base");
                continue;
            }
            if !query.evaluate(&model)? {
                debug!("counter-model after {} models", self.budget.used());
                return Ok(Some(model));
            }
        }
        Ok(None)
    }

    /// Return true if every model of the knowledge base satisfies the query.
    pub fn entails(&mut self, kb: &[Formula], query: &Formula) -> Result<bool, Error> {
        Ok(self.counter_model(kb, query)?.is_none())
    }

    /// Return a model of the knowledge base.
    pub fn model(&mut self, kb: &[Formula]) -> Result<Option<Model>, Error> {
        let symbols = sorted_symbols(kb);
        for model in Models::new(symbols) {
            self.budget.spend()?;
            if satisfies(kb, &model)? {
                return Ok(Some(model));
            }
        }
        Ok(None)
    }

    pub fn satisfiable(&mut self, kb: &[Formula]) -> Result<bool, Error> {
        Ok(self.model(kb)?.is_some())
    }

    /// Decide whether the knowledge base entails the query or its negation.
    pub fn classify(&mut self, kb: &[Formula], query: &Formula) -> Result<Verdict, Error> {
        if self.entails(kb, query)? {
            Ok(Verdict::Yes)
        } else if self.entails(kb, &-query.clone())? {
            Ok(Verdict::No)
        } else {
            Ok(Verdict::Maybe)
        }
    }
}

/// Return true if every model of the knowledge base satisfies the query.
///
/// ~~~
/// use proplog::{check, Formula};
/// let p = Formula::atom("P");
/// assert_eq!(check::entails(&[], &(p.clone() | -p.clone())), Ok(true));
/// assert_eq!(check::entails(&[], &p), Ok(false));
/// ~~~
pub fn entails(kb: &[Formula], query: &Formula) -> Result<bool, Error> {
    ModelChecker::default().entails(kb, query)
}

/// Return true if the formula holds in every model over its atoms.
pub fn is_tautology(fm: &Formula) -> Result<bool, Error> {
    entails(&[], fm)
}
