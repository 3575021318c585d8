use crate::Error;
use alloc::{boxed::Box, string::String, vec, vec::Vec};
use core::fmt::{self, Display};
use core::ops::{Deref, Neg};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Propositional formula.
///
/// Every node owns its children; transformations build new formulas.
/// Atoms compare and hash by their name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Formula {
    Atom(String),
    Not(Box<Formula>),
    And(Operands),
    Or(Operands),
    Implies(Box<Formula>, Box<Formula>),
    Biconditional(Box<Formula>, Box<Formula>),
    /// exclusive disjunction
    Xor(Box<Formula>, Box<Formula>),
}

/// Associative connective.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum OpA {
    Conj,
    Disj,
}

impl Neg for OpA {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Conj => Self::Disj,
            Self::Disj => Self::Conj,
        }
    }
}

impl Display for OpA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpA::Conj => write!(f, "∧"),
            OpA::Disj => write!(f, "∨"),
        }
    }
}

/// Operands of a conjunction or disjunction, at least two of them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Operands(pub(crate) Vec<Formula>);

impl Operands {
    /// Fail with [`Error::InvalidArity`] if fewer than two operands are given.
    pub fn new(op: OpA, fms: Vec<Formula>) -> Result<Self, Error> {
        if fms.len() < 2 {
            Err(Error::InvalidArity(op, fms.len()))
        } else {
            Ok(Self(fms))
        }
    }

    pub fn pair(l: Formula, r: Formula) -> Self {
        Self(vec![l, r])
    }

    /// Apply a function to every operand, keeping their number.
    pub fn map(self, f: impl FnMut(Formula) -> Formula) -> Self {
        Self(self.0.into_iter().map(f).collect())
    }

    /// Separate the first operand from the remaining ones.
    pub fn split_first(self) -> (Formula, Vec<Formula>) {
        let mut fms = self.0;
        let first = fms.remove(0);
        (first, fms)
    }

    pub fn into_vec(self) -> Vec<Formula> {
        self.0
    }
}

impl Deref for Operands {
    type Target = [Formula];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Operands {
    type Item = &'a Formula;
    type IntoIter = core::slice::Iter<'a, Formula>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Operands {
    type Item = Formula;
    type IntoIter = vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn fmt_bina(op: OpA, fms: &Operands, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut fms = fms.iter();
    if let Some(fm1) = fms.next() {
        write!(f, "({}", fm1)?;
        fms.try_for_each(|fm| write!(f, " {} {}", op, fm))?;
    }
    write!(f, ")")
}

impl Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Formula::*;
        match self {
            Atom(a) => write!(f, "{}", a),
            Not(fm) => write!(f, "¬{}", fm),
            And(fms) => fmt_bina(OpA::Conj, fms, f),
            Or(fms) => fmt_bina(OpA::Disj, fms, f),
            Implies(l, r) => write!(f, "({} ⇒ {})", l, r),
            Biconditional(l, r) => write!(f, "({} ⇔ {})", l, r),
            Xor(l, r) => write!(f, "({} ⊕ {})", l, r),
        }
    }
}

impl Neg for Formula {
    type Output = Self;
    fn neg(self) -> Self {
        Self::Not(Box::new(self))
    }
}

impl core::ops::BitAnd for Formula {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::And(Operands::pair(self, rhs))
    }
}

impl core::ops::BitOr for Formula {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::Or(Operands::pair(self, rhs))
    }
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    pub fn bina(op: OpA, fms: impl IntoIterator<Item = Self>) -> Result<Self, Error> {
        let fms = Operands::new(op, fms.into_iter().collect())?;
        Ok(match op {
            OpA::Conj => Self::And(fms),
            OpA::Disj => Self::Or(fms),
        })
    }

    /// Conjunction of at least two formulas.
    ///
    /// ~~~
    /// use proplog::{Error, Formula, OpA};
    /// let p = Formula::atom("P");
    /// assert_eq!(Formula::and([p]), Err(Error::InvalidArity(OpA::Conj, 1)));
    /// ~~~
    pub fn and(fms: impl IntoIterator<Item = Self>) -> Result<Self, Error> {
        Self::bina(OpA::Conj, fms)
    }

    /// Disjunction of at least two formulas.
    pub fn or(fms: impl IntoIterator<Item = Self>) -> Result<Self, Error> {
        Self::bina(OpA::Disj, fms)
    }

    pub fn imp(l: Self, r: Self) -> Self {
        Self::Implies(Box::new(l), Box::new(r))
    }

    pub fn iff(l: Self, r: Self) -> Self {
        Self::Biconditional(Box::new(l), Box::new(r))
    }

    pub fn xor(l: Self, r: Self) -> Self {
        Self::Xor(Box::new(l), Box::new(r))
    }

    /// Disjunction of two formulas, merging operands of disjunctions.
    pub fn disj(l: Self, r: Self) -> Self {
        let mut fms = match l {
            Self::Or(fms) => fms.into_vec(),
            l => Vec::from([l]),
        };
        match r {
            Self::Or(rs) => fms.extend(rs),
            r => fms.push(r),
        }
        Self::Or(Operands(fms))
    }

    /// The negation of a formula, removing a leading negation instead of adding one.
    pub fn complement(self) -> Self {
        match self {
            Self::Not(fm) => *fm,
            fm => -fm,
        }
    }

    /// Return true for atoms and negated atoms.
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Atom(_) => true,
            Self::Not(fm) => matches!(**fm, Self::Atom(_)),
            _ => false,
        }
    }

    /// Return true for literals and disjunctions of literals.
    pub fn is_clause(&self) -> bool {
        match self {
            Self::Or(fms) => fms.iter().all(|fm| fm.is_literal()),
            fm => fm.is_literal(),
        }
    }

    /// Return true if one formula is an atom and the other one its negation.
    pub fn is_complement(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Atom(_), Self::Not(fm)) => **fm == *self,
            (Self::Not(fm), Self::Atom(_)) => **fm == *other,
            _ => false,
        }
    }

    pub fn map_form(self, f: impl Fn(Self) -> Self) -> Self {
        use Formula::*;
        match self {
            Atom(_) => self,
            Not(fm) => -f(*fm),
            And(fms) => And(fms.map(|fm| f(fm))),
            Or(fms) => Or(fms.map(|fm| f(fm))),
            Implies(l, r) => Self::imp(f(*l), f(*r)),
            Biconditional(l, r) => Self::iff(f(*l), f(*r)),
            Xor(l, r) => Self::xor(f(*l), f(*r)),
        }
    }

    /// All subformulas, including the formula itself, in pre-order.
    pub fn subforms(&self) -> Box<dyn Iterator<Item = &Formula> + '_> {
        use core::iter::once;
        use Formula::*;
        match self {
            Atom(_) => Box::new(once(self)),
            Not(fm) => Box::new(once(self).chain(fm.subforms())),
            And(fms) | Or(fms) => Box::new(once(self).chain(fms.iter().flat_map(|fm| fm.subforms()))),
            Implies(l, r) | Biconditional(l, r) | Xor(l, r) => {
                Box::new(once(self).chain(l.subforms()).chain(r.subforms()))
            }
        }
    }

    /// Names of all atom occurrences, possibly with repetitions.
    pub fn atoms(&self) -> impl Iterator<Item = &str> {
        self.subforms().filter_map(|fm| match fm {
            Self::Atom(a) => Some(a.as_str()),
            _ => None,
        })
    }
}
