use crate::cli::Engine;
use proplog::resolution::Normalizer;
use serde::Serialize;

/// Statistics of a prover run.
#[derive(Debug, Serialize)]
pub struct Stats {
    pub engine: Engine,
    /// number of formulas in the knowledge base
    pub formulas: usize,
    /// number of distinct atoms in the problem
    pub symbols: usize,
    /// number of truth assignments examined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalizer: Option<Normalizer>,
    /// number of resolvents computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inferences: Option<usize>,
    /// size of the final clause set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clauses: Option<usize>,
}

impl Stats {
    pub fn new(engine: Engine, formulas: usize, symbols: usize) -> Self {
        Self {
            engine,
            formulas,
            symbols,
            models: None,
            normalizer: None,
            inferences: None,
            clauses: None,
        }
    }
}
