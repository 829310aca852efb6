//! Problem abstraction for NP-hard combinatorial problems.
//!
//! A problem is plugged into the search drivers by implementing
//! [`NpProblem`], and additionally [`LocalSearch`] to be usable by the hybrid
//! steady-state GA in [`crate::ga`].
//!
//! # Core Traits
//!
//! - [`NpProblem`]: feasibility, fitness, generation, crossover, mutation,
//!   comparison and problem size
//! - [`LocalSearch`]: a problem-specific improvement heuristic
//!
//! # Comparison convention
//!
//! [`NpProblem::compare`] returns [`Ordering::Greater`](std::cmp::Ordering::Greater)
//! when its **first** argument is the better (lower-valued) solution. This is
//! the reverse of a numeric comparator; sort with `compare(b, a)` to get the
//! best solution first.

mod types;

pub use types::{Improvement, LocalSearch, NpProblem};
