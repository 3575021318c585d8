//! Propositional problems in TPTP syntax.
//!
//! Only nullary predicates are accepted as atoms;
//! quantifiers, terms and equality make a problem inappropriate.

use crate::role::{falsum, verum, Role, RoleMap};
use crate::szs::NoSuccessKind::{self, Inappropriate};
use crate::{Formula, OpA};
use alloc::string::ToString;
use alloc::vec::Vec;
use log::{info, warn};
use tptp::{cnf, common, fof, top, TPTPIterator};

type Result<T> = core::result::Result<T, NoSuccessKind>;

/// Parse formulas from TPTP input and add them to `forms` by role.
///
/// `f` is called for every included file.
pub fn parse<F>(bytes: &[u8], forms: &mut RoleMap<Vec<Formula>>, f: F) -> Result<()>
where
    F: Fn(&str, &mut RoleMap<Vec<Formula>>) -> Result<()>,
{
    let mut parser = TPTPIterator::<()>::new(bytes);
    for input in &mut parser {
        let input = input.map_err(|_| NoSuccessKind::SyntaxError)?;
        match input {
            top::TPTPInput::Include(include) => f(include.file_name.0 .0, forms)?,
            top::TPTPInput::Annotated(ann) => {
                let (role, formula) = get_role_formula(*ann)?;
                info!("formula: {}", formula);
                forms.get_mut(role).push(formula);
            }
        };
    }
    if parser.remaining.is_empty() {
        Ok(())
    } else {
        Err(NoSuccessKind::SyntaxError)
    }
}

fn get_role_formula(annotated: top::AnnotatedFormula) -> Result<(Role, Formula)> {
    use top::AnnotatedFormula::*;
    match annotated {
        Fof(fof) => Ok((Role::from(fof.0.role), Formula::try_from(*fof.0.formula)?)),
        Cnf(cnf) => Ok((Role::from(cnf.0.role), Formula::try_from(*cnf.0.formula)?)),
        Tfx(_) => {
            warn!("typed formula");
            Err(Inappropriate)
        }
    }
}

fn bina<T>(op: OpA, fms: Vec<T>) -> Result<Formula>
where
    Formula: TryFrom<T, Error = NoSuccessKind>,
{
    let fms = fms.into_iter().map(Formula::try_from);
    let fms = fms.collect::<Result<Vec<_>>>()?;
    Formula::bina(op, fms).map_err(|_| NoSuccessKind::SyntaxError)
}

impl TryFrom<fof::LogicFormula<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::LogicFormula) -> Result<Self> {
        use fof::LogicFormula::*;
        match frm {
            Binary(b) => Self::try_from(b),
            Unary(u) => Self::try_from(u),
            Unitary(u) => Self::try_from(u),
        }
    }
}

impl TryFrom<fof::UnitFormula<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::UnitFormula) -> Result<Self> {
        use fof::UnitFormula::*;
        match frm {
            Unitary(u) => Self::try_from(u),
            Unary(u) => Self::try_from(u),
        }
    }
}

impl TryFrom<fof::UnaryFormula<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::UnaryFormula) -> Result<Self> {
        use fof::UnaryFormula::*;
        match frm {
            Unary(_negation, fuf) => Ok(-Self::try_from(*fuf)?),
            // term inequality
            InfixUnary(_) => Err(Inappropriate),
        }
    }
}

impl TryFrom<fof::BinaryFormula<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::BinaryFormula) -> Result<Self> {
        use fof::BinaryFormula::*;
        match frm {
            Nonassoc(fbn) => Self::try_from(fbn),
            Assoc(fba) => Self::try_from(fba),
        }
    }
}

impl TryFrom<fof::BinaryNonassoc<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::BinaryNonassoc) -> Result<Self> {
        let left = Self::try_from(*frm.left)?;
        let right = Self::try_from(*frm.right)?;
        use common::NonassocConnective::*;
        Ok(match frm.op {
            LRImplies => Self::imp(left, right),
            RLImplies => Self::imp(right, left),
            Equivalent => Self::iff(left, right),
            NotEquivalent => Self::xor(left, right),
            NotOr => -(left | right),
            NotAnd => -(left & right),
        })
    }
}

impl TryFrom<fof::BinaryAssoc<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(fm: fof::BinaryAssoc) -> Result<Self> {
        use fof::BinaryAssoc::*;
        match fm {
            Or(fms) => bina(OpA::Disj, fms.0),
            And(fms) => bina(OpA::Conj, fms.0),
        }
    }
}

impl TryFrom<fof::UnitaryFormula<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::UnitaryFormula) -> Result<Self> {
        use fof::UnitaryFormula::*;
        match frm {
            Parenthesised(flf) => Self::try_from(*flf),
            Quantified(_) => {
                warn!("quantified formula");
                Err(Inappropriate)
            }
            Atomic(a) => Self::try_from(*a),
        }
    }
}

impl TryFrom<fof::PlainAtomicFormula<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::PlainAtomicFormula) -> Result<Self> {
        use fof::PlainTerm::*;
        match frm.0 {
            Constant(c) => Ok(Self::atom(c.to_string())),
            Function(f, _) => {
                warn!("predicate {} with arguments", f);
                Err(Inappropriate)
            }
        }
    }
}

impl TryFrom<fof::DefinedAtomicFormula<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::DefinedAtomicFormula) -> Result<Self> {
        use fof::DefinedAtomicFormula::*;
        match frm {
            Plain(p) => Self::try_from(p),
            // equality
            Infix(_) => Err(Inappropriate),
        }
    }
}

impl TryFrom<fof::DefinedPlainFormula<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(fm: fof::DefinedPlainFormula) -> Result<Self> {
        use fof::DefinedPlainTerm::Constant;
        match fm.0 {
            Constant(c) if c.0 .0 .0 .0 .0 == "true" => Ok(verum()),
            Constant(c) if c.0 .0 .0 .0 .0 == "false" => Ok(falsum()),
            _ => Err(Inappropriate),
        }
    }
}

impl TryFrom<fof::AtomicFormula<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::AtomicFormula) -> Result<Self> {
        use fof::AtomicFormula::*;
        match frm {
            Plain(p) => Self::try_from(p),
            Defined(d) => Self::try_from(d),
            System(_) => Err(Inappropriate),
        }
    }
}

impl TryFrom<fof::Formula<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::Formula) -> Result<Self> {
        Self::try_from(frm.0)
    }
}

impl TryFrom<cnf::Literal<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(lit: cnf::Literal) -> Result<Self> {
        use cnf::Literal::*;
        match lit {
            Atomic(a) => Self::try_from(a),
            NegatedAtomic(a) => Ok(-Self::try_from(a)?),
            Infix(_) => Err(Inappropriate),
        }
    }
}

impl TryFrom<cnf::Disjunction<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: cnf::Disjunction) -> Result<Self> {
        let mut lits = frm.0;
        if lits.len() == 1 {
            if let Some(lit) = lits.pop() {
                return Self::try_from(lit);
            }
        }
        bina(OpA::Disj, lits)
    }
}

impl TryFrom<cnf::Formula<'_>> for Formula {
    type Error = NoSuccessKind;
    fn try_from(frm: cnf::Formula) -> Result<Self> {
        use cnf::Formula::*;
        match frm {
            Disjunction(d) | Parenthesised(d) => Self::try_from(d),
        }
    }
}

impl From<top::FormulaRole<'_>> for Role {
    fn from(role: top::FormulaRole<'_>) -> Self {
        match role.0 .0 {
            "conjecture" => Self::Conjecture,
            "negated_conjecture" => Self::NegatedConjecture,
            _ => Self::Other,
        }
    }
}
