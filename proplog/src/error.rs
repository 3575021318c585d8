use crate::{Formula, OpA};
use alloc::string::String;
use core::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An atom was evaluated in a model that does not assign it.
    UnknownSymbol(String),
    /// A conjunction or disjunction was built from fewer than two operands.
    InvalidArity(OpA, usize),
    /// A rule was instantiated with a premise of the wrong shape.
    RuleApplication(&'static str, Formula),
    /// A step limit was reached after the given number of steps.
    BudgetExhausted(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            UnknownSymbol(s) => write!(f, "symbol '{}' not found in model", s),
            InvalidArity(op, n) => write!(f, "{} requires at least 2 operands, got {}", op, n),
            RuleApplication(rule, fm) => write!(f, "{} cannot be applied to {}", rule, fm),
            BudgetExhausted(n) => write!(f, "step limit exhausted after {} steps", n),
        }
    }
}
