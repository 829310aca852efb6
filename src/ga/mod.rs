//! Hybrid steady-state Genetic Algorithm.
//!
//! A steady-state GA that pairs population search with a problem-specific
//! local search. Any problem implementing
//! [`LocalSearch`](crate::problem::LocalSearch) can be solved; children are
//! improved, evaluated and inserted one at a time in place of the current
//! worst member, never in whole-generation batches.
//!
//! # Key Types
//!
//! - [`SsgaConfig`]: Algorithm parameters (population size, rates, presets)
//! - [`SsgaRunner`]: Executes the evolutionary loop
//! - [`SsgaResult`]: Final optimization result with statistics
//! - [`Population`]: Solutions with their cached fitness
//!
//! # Submodules
//!
//! - [`operators`]: Generic bit-string crossover (TPX) and mutation operators
//! - [`selection`]: Binary tournament and candidate-set selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Chu & Beasley (1998), "Constraint Handling in Genetic Algorithms: The Set
//!   Partitioning Problem"

mod config;
pub mod operators;
mod population;
mod runner;
pub mod selection;

pub use config::SsgaConfig;
pub use population::Population;
pub use runner::{SsgaResult, SsgaRunner};
