//! Set Partitioning Problem (SPP).
//!
//! Given `m` rows and `n` sets of rows with costs, select sets so that every
//! row is covered by exactly one selected set, at minimum total cost.
//!
//! - [`SppProblem`]: the instance, implementing [`NpProblem`](crate::problem::NpProblem)
//!   with a penalized fitness and structure-aware random generation
//! - [`RowStrategy`]: parameters of the row-oriented local search, the
//!   [`LocalSearch`](crate::problem::LocalSearch) implementation
//! - Instances parse from OR-Library text via [`str::parse`]
//!
//! # References
//!
//! - Chu & Beasley (1998), "Constraint Handling in Genetic Algorithms: The Set
//!   Partitioning Problem", *Journal of Heuristics* 4
//! - Beasley (1990), "OR-Library: Distributing Test Problems by Electronic Mail"

mod model;
mod parse;
mod search;

pub use model::{SppProblem, DEFAULT_PENALTY_FACTOR};
pub use search::{RowSelection, RowStrategy};
