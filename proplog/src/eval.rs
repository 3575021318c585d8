use crate::{Error, Formula};
use alloc::string::String;
use hashbrown::HashMap;

/// Truth assignment from atom names to truth values.
pub type Model = HashMap<String, bool>;

impl Formula {
    /// Truth value of the formula in a model.
    ///
    /// Conjunctions and disjunctions are evaluated from left to right and
    /// stop at the first operand that decides their value, so
    /// atoms after that operand need not be assigned.
    ///
    /// ~~~
    /// use proplog::{Error, Formula, Model};
    /// let model: Model = [("P".to_string(), true)].into_iter().collect();
    /// assert_eq!(Formula::atom("P").evaluate(&model), Ok(true));
    /// let z = Formula::atom("Z");
    /// assert_eq!(z.evaluate(&model), Err(Error::UnknownSymbol("Z".to_string())));
    /// ~~~
    pub fn evaluate(&self, model: &Model) -> Result<bool, Error> {
        use Formula::*;
        match self {
            Atom(a) => model
                .get(a.as_str())
                .copied()
                .ok_or_else(|| Error::UnknownSymbol(a.clone())),
            Not(fm) => Ok(!fm.evaluate(model)?),
            And(fms) => {
                for fm in fms {
                    if !fm.evaluate(model)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Or(fms) => {
                for fm in fms {
                    if fm.evaluate(model)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Implies(a, c) => Ok(!a.evaluate(model)? || c.evaluate(model)?),
            Biconditional(l, r) => Ok(l.evaluate(model)? == r.evaluate(model)?),
            Xor(l, r) => Ok(l.evaluate(model)? != r.evaluate(model)?),
        }
    }
}

/// Return true if a model satisfies every formula, stopping at the first falsified one.
pub fn satisfies(kb: &[Formula], model: &Model) -> Result<bool, Error> {
    for fm in kb {
        if !fm.evaluate(model)? {
            return Ok(false);
        }
    }
    Ok(true)
}
