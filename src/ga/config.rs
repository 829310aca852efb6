//! Steady-state GA configuration.
//!
//! [`SsgaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Error, Result};

/// Configuration for the hybrid steady-state GA.
///
/// `S` is the local-search strategy of the problem being solved
/// ([`LocalSearch::Strategy`](crate::problem::LocalSearch::Strategy)).
///
/// # Defaults
///
/// ```
/// use u_nphard::ga::SsgaConfig;
/// use u_nphard::spp::RowStrategy;
///
/// let config = SsgaConfig::<RowStrategy>::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// assert_eq!(config.improvements, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_nphard::ga::SsgaConfig;
/// use u_nphard::problem::Improvement;
/// use u_nphard::spp::{RowSelection, RowStrategy};
///
/// let config = SsgaConfig::default()
///     .with_population_size(50)
///     .with_strategy(RowStrategy::new(Improvement::First, RowSelection::Random))
///     .with_crossover_rate(0.8)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SsgaConfig<S> {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run. There is no early termination.
    pub generations: usize,

    /// Local-search passes applied to every new solution, and to the final
    /// best solution.
    pub improvements: usize,

    /// Local-search strategy handed to
    /// [`LocalSearch::improve`](crate::problem::LocalSearch::improve).
    pub strategy: S,

    /// Fraction of the population drawn as breeding candidates each
    /// generation, in `(0, 1]`.
    pub selection_rate: f64,

    /// Probability that a candidate is crossed over, in `(0, 1]`.
    pub crossover_rate: f64,

    /// Improve and evaluate each generation's children in parallel.
    ///
    /// Requires the `parallel` feature; ignored otherwise. Children are
    /// then committed in a separate phase, so the trajectory differs from
    /// a sequential run with the same seed (but is itself reproducible).
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl<S: Default> Default for SsgaConfig<S> {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            improvements: 1,
            strategy: S::default(),
            selection_rate: 0.5,
            crossover_rate: 0.7,
            parallel: false,
            seed: None,
        }
    }
}

impl<S> SsgaConfig<S> {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the number of local-search passes per solution.
    pub fn with_improvements(mut self, n: usize) -> Self {
        self.improvements = n;
        self
    }

    /// Sets the local-search strategy.
    pub fn with_strategy(mut self, strategy: S) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the selection rate.
    pub fn with_selection_rate(mut self, rate: f64) -> Self {
        self.selection_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel child improvement.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of breeding candidates per generation:
    /// `floor(population_size * selection_rate)`.
    pub fn candidate_count(&self) -> usize {
        (self.population_size as f64 * self.selection_rate).floor() as usize
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::invalid("population_size", "must be at least 1"));
        }
        if self.generations == 0 {
            return Err(Error::invalid("generations", "must be at least 1"));
        }
        if self.improvements == 0 {
            return Err(Error::invalid("improvements", "must be at least 1"));
        }
        if !(self.selection_rate > 0.0 && self.selection_rate <= 1.0) {
            return Err(Error::invalid(
                "selection_rate",
                format!("must be in (0, 1], got {}", self.selection_rate),
            ));
        }
        if !(self.crossover_rate > 0.0 && self.crossover_rate <= 1.0) {
            return Err(Error::invalid(
                "crossover_rate",
                format!("must be in (0, 1], got {}", self.crossover_rate),
            ));
        }
        Ok(())
    }
}

impl<S: Default> SsgaConfig<S> {
    /// Preset for fast runs: small population, few generations.
    ///
    /// - Population: 30, Generations: 100
    pub fn fast() -> Self {
        Self {
            population_size: 30,
            generations: 100,
            ..Self::default()
        }
    }

    /// Preset matching the published SSGA-ROW parameters.
    ///
    /// - Population: 100, Generations: 500
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for quality: larger population, more generations and two
    /// local-search passes per child.
    ///
    /// - Population: 150, Generations: 1000, Improvements: 2
    pub fn quality() -> Self {
        Self {
            population_size: 150,
            generations: 1000,
            improvements: 2,
            ..Self::default()
        }
    }

    /// Automatically selects a preset based on problem size.
    ///
    /// - `size < 50` → [`fast()`](Self::fast)
    /// - `50 ≤ size < 1000` → [`balanced()`](Self::balanced)
    /// - `size ≥ 1000` → [`quality()`](Self::quality)
    pub fn auto_select(size: usize) -> Self {
        if size < 50 {
            Self::fast()
        } else if size < 1000 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }
}
