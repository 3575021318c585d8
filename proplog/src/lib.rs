//! Propositional reasoning by exhaustive model checking,
//! clausal resolution and rule-by-rule proof.
//!
//! ~~~
//! use proplog::{check, Formula};
//! let (p, q) = (Formula::atom("P"), Formula::atom("Q"));
//! let kb = [Formula::imp(p.clone(), q.clone()), p];
//! assert_eq!(check::entails(&kb, &q), Ok(true));
//! ~~~
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod budget;
pub mod change;
pub mod check;
mod clause;
pub mod cnf;
mod error;
mod eval;
mod formula;
pub mod prover;
pub mod quant;
pub mod resolution;
pub mod role;
pub mod rules;
mod symbols;
pub mod szs;
#[cfg(feature = "tptp")]
pub mod tptp;

pub use budget::Budget;
pub use clause::Clause;
pub use error::Error;
pub use eval::{satisfies, Model};
pub use formula::{Formula, OpA, Operands};
pub use prover::{prove, Proof};
pub use resolution::{refute, ProofResult};
pub use rules::Rule;
pub use symbols::{extract_symbols, sorted_symbols};
