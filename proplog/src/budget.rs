use crate::Error;

/// Step counter with an optional upper limit.
///
/// ~~~
/// use proplog::{Budget, Error};
/// let mut budget = Budget::new(Some(2));
/// assert!(budget.spend().is_ok());
/// assert!(budget.spend().is_ok());
/// assert_eq!(budget.spend(), Err(Error::BudgetExhausted(2)));
/// ~~~
#[derive(Copy, Clone, Debug, Default)]
pub struct Budget {
    lim: Option<usize>,
    used: usize,
}

impl Budget {
    pub fn new(lim: Option<usize>) -> Self {
        Self { lim, used: 0 }
    }

    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// Take one step, failing if the limit has already been reached.
    pub fn spend(&mut self) -> Result<(), Error> {
        match self.lim {
            Some(lim) if self.used >= lim => Err(Error::BudgetExhausted(self.used)),
            _ => {
                self.used += 1;
                Ok(())
            }
        }
    }

    /// Number of steps taken so far.
    pub fn used(&self) -> usize {
        self.used
    }
}
