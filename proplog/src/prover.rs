//! Forward proofs with a fixed sequence of inference rules.

use crate::{Formula, Rule};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use log::{debug, info};
#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Outcome {
    /// formulas that were new to the knowledge base
    Derived(Vec<Formula>),
    /// the rule could not be applied, with the reason
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Step {
    pub rule: Rule,
    pub outcome: Outcome,
    /// size of the knowledge base after the step
    pub kb_size: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Proof {
    pub success: bool,
    pub steps: Vec<Step>,
    /// the knowledge base with all derived formulas
    pub kb: Vec<Formula>,
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.rule.name())?;
        match &self.outcome {
            Outcome::Derived(fms) if fms.is_empty() => write!(f, "nothing new")?,
            Outcome::Derived(fms) => {
                let mut iter = fms.iter();
                if let Some(fm) = iter.next() {
                    write!(f, "{}", fm)?;
                }
                iter.try_for_each(|fm| write!(f, ", {}", fm))?
            }
            Outcome::Failed(e) => write!(f, "error: {}", e)?,
        }
        write!(f, " (KB size {})", self.kb_size)
    }
}

impl Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, step)?;
        }
        let status = if self.success { "proved" } else { "not proved" };
        write!(f, "{}", status)
    }
}

/// Apply the rules in order to a copy of the knowledge base until it contains the goal.
///
/// Rules that fail are recorded in the trace, and the remaining rules are still applied.
///
/// ~~~
/// use proplog::{prove, Formula, Rule};
/// let (p, q) = (Formula::atom("P"), Formula::atom("Q"));
/// let pq = Formula::imp(p.clone(), q.clone());
/// let proof = prove(&[pq.clone(), p], &[Rule::ModusPonens(pq)], &q);
/// assert!(proof.success);
/// assert_eq!(proof.steps.len(), 1);
/// assert_eq!(proof.kb.last(), Some(&q));
/// ~~~
pub fn prove(kb: &[Formula], rules: &[Rule], goal: &Formula) -> Proof {
    let mut kb = kb.to_vec();
    let mut steps = Vec::new();
    info!("prove {} from {} formulas", goal, kb.len());
    for rule in rules {
        if kb.contains(goal) {
            break;
        }
        let outcome = match rule.apply(&kb) {
            Ok(fms) => {
                let mut new = Vec::new();
                for fm in fms {
                    if !kb.contains(&fm) && !new.contains(&fm) {
                        new.push(fm)
                    }
                }
                kb.extend(new.iter().cloned());
                Outcome::Derived(new)
            }
            Err(e) => Outcome::Failed(e.to_string()),
        };
        let step = Step {
            rule: rule.clone(),
            outcome,
            kb_size: kb.len(),
        };
        debug!("{}", step);
        steps.push(step);
    }
    let success = kb.contains(goal);
    info!("{} after {} steps", if success { "proved" } else { "failed" }, steps.len());
    Proof { success, steps, kb }
}
