//! Metaheuristic optimization for NP-hard problems encoded as bit vectors.
//!
//! Provides:
//!
//! - **Problem abstraction**: [`problem::NpProblem`] (feasibility, fitness,
//!   generation, crossover, mutation, comparison) and
//!   [`problem::LocalSearch`] (problem-specific improvement).
//! - **Hybrid Steady-State GA**: [`ga::SsgaRunner`] — binary tournament
//!   selection, crossover, local search on every child, and strict
//!   worst-member replacement.
//! - **Set Partitioning Problem**: [`spp::SppProblem`] — penalized exact
//!   cover fitness with the row-oriented (ROW) local search.
//! - **Bit vectors**: [`bits::BitVector`] with an explicit deep copy
//!   ([`Clone`]) and a borrowed view ([`bits::BitView`]).
//!
//! # Example
//!
//! ```
//! use u_nphard::ga::{SsgaConfig, SsgaRunner};
//! use u_nphard::problem::Improvement;
//! use u_nphard::spp::{RowSelection, RowStrategy, SppProblem};
//!
//! let spp: SppProblem = "3 4\n1 1 1\n1 1 2\n1 1 3\n1 3 1 2 3\n".parse()?;
//! let config = SsgaConfig::default()
//!     .with_population_size(20)
//!     .with_generations(50)
//!     .with_strategy(RowStrategy::new(Improvement::Best, RowSelection::Max))
//!     .with_seed(1);
//! let result = SsgaRunner::run(&spp, &config)?;
//! assert!(result.feasible);
//! assert_eq!(result.best_fitness, 1.0);
//! # Ok::<(), u_nphard::Error>(())
//! ```
//!
//! # Architecture
//!
//! Data flows one way: driver → problem abstraction → bit vector. The
//! driver never inspects solutions itself. Randomness is always an injected
//! `&mut impl Rng`; runners seed their own from the configuration.

pub mod bits;
pub mod error;
pub mod ga;
pub mod problem;
pub mod random;
pub mod spp;

pub use error::{Error, Result};
