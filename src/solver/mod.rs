pub mod constants;
mod batch;
mod core;
mod errors;
mod solutions;
mod types;

pub use self::core::Solver;
pub use batch::solve_all;
pub use errors::SolverError;
pub use types::{SearchOutcome, SearchStats};

#[cfg(test)]
mod tests;
