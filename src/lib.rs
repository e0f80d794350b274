mod assignments;
pub mod config;
pub mod conflict;
mod dependencies;
mod dimacs;
pub mod error;
mod evaluate;
pub mod formula;
pub mod heuristic;
mod literal;
pub mod log;
mod propagation;
mod sign;
mod solver;
mod trail;
mod watched;

pub use assignments::{Assignment, Assignments};
pub use config::{Config, LearnedClauses};
pub use dependencies::Dependencies;
pub use error::Error;
pub use evaluate::Evaluate;
pub use formula::{Clause, ClauseKey, Formula};
pub use literal::Literal;
pub use sign::Sign;
pub use solver::{Solution, Solver, State, Stats};
pub use trail::{Frame, Trail};
pub use watched::Watched;

pub type Variable = usize;
pub type ClauseIdx = usize;
pub type DecisionLevel = usize;
