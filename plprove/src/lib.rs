pub mod cli;
mod error;
pub mod parse;
mod stats;

pub use cli::Cli;
pub use error::Error;
pub use stats::Stats;
