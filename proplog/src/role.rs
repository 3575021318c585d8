use crate::{Error, Formula};
use alloc::vec::Vec;

#[derive(PartialEq, Debug, Eq, Hash)]
pub enum Role {
    Conjecture,
    NegatedConjecture,
    Other,
}

#[derive(Debug, Default)]
pub struct RoleMap<F>(hashbrown::HashMap<Role, F>);

impl<F: Default> RoleMap<F> {
    pub fn get_mut(&mut self, role: Role) -> &mut F {
        self.0.entry(role).or_default()
    }

    fn remove(&mut self, role: &Role) -> F {
        self.0.remove(role).unwrap_or_default()
    }
}

/// Knowledge base and optional query of a problem.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Problem {
    pub kb: Vec<Formula>,
    pub query: Option<Formula>,
}

impl Problem {
    /// The query, or falsity if there is none.
    ///
    /// Entailing falsity means that the knowledge base is unsatisfiable.
    pub fn goal(&self) -> Formula {
        self.query.clone().unwrap_or_else(falsum)
    }
}

/// `$false ∧ ¬$false`
pub fn falsum() -> Formula {
    let p = Formula::atom("$false");
    p.clone() & -p
}

/// `$true ⇒ $true`
pub fn verum() -> Formula {
    let p = Formula::atom("$true");
    Formula::imp(p.clone(), p)
}

impl RoleMap<Vec<Formula>> {
    /// Collect axioms and negated conjectures into the knowledge base,
    /// and take the conjunction of conjectures as query.
    ///
    /// ~~~
    /// use proplog::role::{Role, RoleMap};
    /// use proplog::Formula;
    /// let (p, q) = (Formula::atom("P"), Formula::atom("Q"));
    /// let mut roles: RoleMap<Vec<Formula>> = RoleMap::default();
    /// roles.get_mut(Role::Other).push(p.clone());
    /// roles.get_mut(Role::Conjecture).push(q.clone());
    /// let problem = roles.join().unwrap();
    /// assert_eq!(problem.kb, vec![p]);
    /// assert_eq!(problem.query, Some(q));
    /// ~~~
    pub fn join(mut self) -> Result<Problem, Error> {
        let mut kb = self.remove(&Role::Other);
        kb.append(&mut self.remove(&Role::NegatedConjecture));
        let mut cj = self.remove(&Role::Conjecture);
        let query = match cj.len() {
            0 => None,
            1 => cj.pop(),
            _ => Some(Formula::and(cj)?),
        };
        Ok(Problem { kb, query })
    }
}
