use clap::Parser;
use proplog::resolution::Normalizer;
use std::path::PathBuf;

/// Propositional prover for TPTP problems
///
/// Decides whether the axioms of a propositional problem entail its conjecture,
/// either by enumerating all truth assignments or by resolution.
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// Decision procedure: "models" or "resolution"
    #[arg(long, default_value = "models")]
    pub engine: Engine,

    /// Maximal number of models or resolvents to examine
    #[arg(long)]
    pub lim: Option<usize>,

    /// Clausal normal form used by resolution: "pass" or "full"
    ///
    /// "pass" repeats a single top-level rewrite until nothing changes,
    /// which may leave formulas that are not clauses.
    /// Resolution then gives up instead of reporting a counter-satisfiable problem.
    #[arg(long, default_value = "pass")]
    pub cnf: Normalizer,

    /// Write SZS output (such as counter-models and error details) to given file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write statistics in JSON format to given file
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Path of the TPTP problem file
    pub file: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Models,
    Resolution,
}

impl std::str::FromStr for Engine {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "models" => Ok(Self::Models),
            "resolution" => Ok(Self::Resolution),
            _ => Err(format!("unknown engine: {}", s)),
        }
    }
}

impl Cli {
    pub fn output(&self, out: impl std::fmt::Display) -> Result<(), std::io::Error> {
        use std::io::Write;
        match &self.output {
            Some(o) => std::fs::write(o, out.to_string()),
            None => write!(std::io::stdout(), "{}", proplog::szs::Output(out)),
        }
    }
}
