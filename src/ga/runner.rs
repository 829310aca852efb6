//! Steady-state GA loop execution.
//!
//! [`SsgaRunner`] orchestrates the hybrid evolutionary process:
//! generation → local search → (tournament selection → crossover →
//! local search → worst replacement) × generations → final local search.

use super::config::SsgaConfig;
use super::population::Population;
use super::selection::select_candidates;
use crate::error::Result;
use crate::problem::LocalSearch;
use crate::random::rng_from;
use log::{debug, info};
use rand::Rng;

#[cfg(feature = "parallel")]
use crate::random::create_rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a steady-state GA run.
#[derive(Debug, Clone)]
pub struct SsgaResult<S> {
    /// The best solution, after its final local-search passes.
    pub best: S,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Whether `best` satisfies every constraint of the problem.
    pub feasible: bool,

    /// Number of generations executed.
    pub generations: usize,

    /// Number of children that replaced a population member.
    pub replacements: usize,

    /// Best cached population fitness after initialization and after each
    /// generation (`generations + 1` entries, non-increasing).
    pub fitness_history: Vec<f64>,
}

/// Executes the hybrid steady-state GA.
///
/// # Usage
///
/// ```
/// use u_nphard::ga::{SsgaConfig, SsgaRunner};
/// use u_nphard::spp::SppProblem;
///
/// let spp = SppProblem::new(3, vec![vec![0], vec![1], vec![2], vec![0, 1, 2]], vec![1.0; 4])?;
/// let config = SsgaConfig::default()
///     .with_population_size(10)
///     .with_generations(20)
///     .with_seed(42);
/// let result = SsgaRunner::run(&spp, &config)?;
/// assert!(result.feasible);
/// assert_eq!(result.best.to_string(), "0001");
/// # Ok::<(), u_nphard::Error>(())
/// ```
pub struct SsgaRunner;

impl SsgaRunner {
    /// Runs the steady-state GA.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
    /// the configuration is invalid. Nothing can fail once the search starts.
    pub fn run<P: LocalSearch>(
        problem: &P,
        config: &SsgaConfig<P::Strategy>,
    ) -> Result<SsgaResult<P::Solution>> {
        config.validate()?;

        let mut rng = rng_from(config.seed);

        info!(
            "ssga: size {}, population {}, {} generations, {} candidates, {} improvements, {:?}",
            problem.size(),
            config.population_size,
            config.generations,
            config.candidate_count(),
            config.improvements,
            config.strategy
        );

        // 1. Initialize population
        let initial: Vec<P::Solution> = (0..config.population_size)
            .map(|_| problem.generate(&mut rng))
            .collect();
        let mut population =
            Population::from_evaluated(improve_all(problem, initial, config, &mut rng));

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(population.fitness()[population.best_index()]);
        let mut replacements = 0usize;

        // 2. Evolutionary loop
        for gen in 0..config.generations {
            let accepted = evolve(problem, &mut population, config, &mut rng);
            replacements += accepted;

            let best = population.fitness()[population.best_index()];
            fitness_history.push(best);

            debug!(
                "generation {}: best {:.4}, worst {:.4}, {} replacements",
                gen + 1,
                best,
                population.fitness()[population.worst_index()],
                accepted
            );
        }

        // 3. Polish the best member
        let (best, _) = population.into_best();
        let (best, best_fitness) = improve_evaluated(problem, best, config, &mut rng);
        let feasible = problem.validate(&best);

        info!(
            "ssga: finished, best {:.4} ({}), {} replacements",
            best_fitness,
            if feasible { "feasible" } else { "infeasible" },
            replacements
        );

        Ok(SsgaResult {
            best,
            best_fitness,
            feasible,
            generations: config.generations,
            replacements,
            fitness_history,
        })
    }
}

/// One generation: candidate selection, crossover, improvement and
/// immediate worst replacement. Returns the number of accepted children.
fn evolve<P: LocalSearch, R: Rng>(
    problem: &P,
    population: &mut Population<P::Solution>,
    config: &SsgaConfig<P::Strategy>,
    rng: &mut R,
) -> usize {
    #[cfg(feature = "parallel")]
    if config.parallel {
        return evolve_batched(problem, population, config, rng);
    }

    let candidates = select_candidates(population.fitness(), config.candidate_count(), rng);
    let mut accepted = 0;

    for &s in &candidates {
        if rng.random::<f64>() >= config.crossover_rate {
            continue;
        }
        let p = candidates[rng.random_range(0..candidates.len())];
        let children = problem.crossover(population.get(s), population.get(p), rng);

        for child in children {
            let (child, fitness) = improve_evaluated(problem, child, config, rng);
            if population.replace_worst(child, fitness) {
                accepted += 1;
            }
        }
    }

    accepted
}

/// Batched generation: all children are bred from the population as it
/// stood at the start of the generation, improved in parallel, then
/// committed in breeding order.
#[cfg(feature = "parallel")]
fn evolve_batched<P: LocalSearch, R: Rng>(
    problem: &P,
    population: &mut Population<P::Solution>,
    config: &SsgaConfig<P::Strategy>,
    rng: &mut R,
) -> usize {
    let candidates = select_candidates(population.fitness(), config.candidate_count(), rng);

    let mut children = Vec::new();
    for &s in &candidates {
        if rng.random::<f64>() >= config.crossover_rate {
            continue;
        }
        let p = candidates[rng.random_range(0..candidates.len())];
        children.extend(problem.crossover(population.get(s), population.get(p), rng));
    }

    improve_all(problem, children, config, rng)
        .into_iter()
        .fold(0, |accepted, (child, fitness)| {
            accepted + usize::from(population.replace_worst(child, fitness))
        })
}

/// Applies `config.improvements` local-search passes and evaluates the result.
fn improve_evaluated<P: LocalSearch, R: Rng>(
    problem: &P,
    mut solution: P::Solution,
    config: &SsgaConfig<P::Strategy>,
    rng: &mut R,
) -> (P::Solution, f64) {
    for _ in 0..config.improvements {
        solution = problem.improve(&solution, &config.strategy, rng);
    }
    let fitness = problem.value(&solution);
    (solution, fitness)
}

/// [`improve_evaluated`] over a batch, in parallel when enabled. Order is
/// preserved.
fn improve_all<P: LocalSearch, R: Rng>(
    problem: &P,
    solutions: Vec<P::Solution>,
    config: &SsgaConfig<P::Strategy>,
    rng: &mut R,
) -> Vec<(P::Solution, f64)> {
    #[cfg(feature = "parallel")]
    if config.parallel {
        let seeds: Vec<u64> = solutions.iter().map(|_| rng.random()).collect();
        return solutions
            .into_par_iter()
            .zip(seeds)
            .map(|(solution, seed)| {
                let mut local = create_rng(seed);
                improve_evaluated(problem, solution, config, &mut local)
            })
            .collect();
    }

    solutions
        .into_iter()
        .map(|solution| improve_evaluated(problem, solution, config, rng))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitVector;
    use crate::error::Error;
    use crate::ga::operators::{bit_flip_mutation, two_point_crossover, DEFAULT_CROSSOVER_FACTOR};
    use crate::problem::{Improvement, NpProblem};
    use crate::spp::{RowSelection, RowStrategy, SppProblem};

    // ---- OneMax: minimize the number of zero bits ----

    struct OneMax {
        n: usize,
    }

    impl NpProblem for OneMax {
        type Solution = BitVector;

        fn size(&self) -> usize {
            self.n
        }

        fn validate(&self, s: &BitVector) -> bool {
            s.all()
        }

        fn value(&self, s: &BitVector) -> f64 {
            (s.len() - s.count_ones()) as f64
        }

        fn generate<R: Rng>(&self, rng: &mut R) -> BitVector {
            (0..self.n).map(|_| rng.random_bool(0.5)).collect()
        }

        fn crossover<R: Rng>(&self, a: &BitVector, b: &BitVector, rng: &mut R) -> [BitVector; 2] {
            let (c1, c2) = two_point_crossover(a, b, DEFAULT_CROSSOVER_FACTOR, rng);
            [c1, c2]
        }

        fn mutate<R: Rng>(
            &self,
            s: &BitVector,
            rate: Option<f64>,
            count: usize,
            rng: &mut R,
        ) -> Vec<BitVector> {
            (0..count)
                .map(|_| {
                    let mut v = s.clone();
                    bit_flip_mutation(&mut v, rate.unwrap_or(0.1), rng);
                    v
                })
                .collect()
        }
    }

    impl LocalSearch for OneMax {
        type Strategy = ();

        /// Sets one random bit; never worse.
        fn improve<R: Rng>(&self, s: &BitVector, _: &(), rng: &mut R) -> BitVector {
            let mut v = s.clone();
            v.set(rng.random_range(0..self.n), true);
            v
        }
    }

    #[test]
    fn test_onemax_convergence() {
        let problem = OneMax { n: 20 };
        let config = SsgaConfig::default()
            .with_population_size(30)
            .with_generations(200)
            .with_seed(42);

        let result = SsgaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.best_fitness, 0.0);
        assert!(result.feasible);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = OneMax { n: 8 };
        let config = SsgaConfig::default().with_generations(0);
        assert!(matches!(
            SsgaRunner::run(&problem, &config),
            Err(Error::InvalidParameter { name: "generations", .. })
        ));
    }

    #[test]
    fn test_fitness_history_monotonic() {
        let problem = OneMax { n: 64 };
        let config = SsgaConfig::default()
            .with_population_size(20)
            .with_generations(30)
            .with_seed(3);

        let result = SsgaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.fitness_history.len(), 31);
        assert_eq!(result.generations, 30);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best fitness must never get worse: {} > {}",
                window[1],
                window[0]
            );
        }
        assert!(result.best_fitness <= result.fitness_history[0]);
        assert!(result.best_fitness <= *result.fitness_history.last().unwrap());
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = OneMax { n: 32 };
        let config = SsgaConfig::default()
            .with_population_size(10)
            .with_generations(15)
            .with_seed(99);

        let a = SsgaRunner::run(&problem, &config).unwrap();
        let b = SsgaRunner::run(&problem, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
        assert_eq!(a.replacements, b.replacements);
    }

    #[test]
    fn test_population_of_one() {
        let problem = OneMax { n: 8 };
        let config = SsgaConfig::default()
            .with_population_size(1)
            .with_generations(5)
            .with_seed(1);

        // floor(1 * 0.5) = 0 candidates: no breeding, only polishing.
        let result = SsgaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.replacements, 0);
        assert_eq!(result.fitness_history.len(), 6);
    }

    // ---- SPP ----

    #[test]
    fn test_spp_tiny_prefers_single_cover() {
        let spp = SppProblem::new(3, vec![vec![0], vec![1], vec![2], vec![0, 1, 2]], vec![1.0; 4])
            .unwrap();
        let config = SsgaConfig::default()
            .with_population_size(10)
            .with_generations(20)
            .with_seed(7);

        let result = SsgaRunner::run(&spp, &config).unwrap();
        assert!(result.feasible);
        assert_eq!(result.best.to_string(), "0001");
        assert_eq!(result.best_fitness, 1.0);
    }

    /// Six rows; the unique optimum is the two triples at cost 2.
    fn planted() -> SppProblem {
        let mut sets: Vec<Vec<usize>> = vec![vec![0, 1, 2], vec![3, 4, 5]];
        sets.extend((0..6).map(|r| vec![r]));
        sets.push(vec![0, 3]);
        sets.push(vec![1, 2, 4, 5]);
        let costs = vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.5, 1.5];
        SppProblem::new(6, sets, costs).unwrap()
    }

    #[test]
    fn test_spp_planted_optimum_all_strategies() {
        let spp = planted();
        for improvement in [Improvement::Best, Improvement::First] {
            for row_selection in [RowSelection::Max, RowSelection::Random] {
                let config = SsgaConfig::default()
                    .with_population_size(40)
                    .with_generations(200)
                    .with_strategy(RowStrategy::new(improvement, row_selection))
                    .with_seed(11);

                let result = SsgaRunner::run(&spp, &config).unwrap();
                assert!(result.feasible, "{improvement:?}/{row_selection:?} infeasible");
                assert_eq!(result.best.to_string(), "1100000000");
                assert_eq!(result.best_fitness, 2.0);
            }
        }
    }

    #[test]
    fn test_spp_result_not_worse_than_initial_best() {
        let spp = planted();
        let config = SsgaConfig::default()
            .with_population_size(8)
            .with_generations(10)
            .with_improvements(2)
            .with_seed(5);

        let result = SsgaRunner::run(&spp, &config).unwrap();
        assert!(result.best_fitness <= result.fitness_history[0]);
        assert_eq!(result.best_fitness, spp.value(&result.best));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_deterministic_and_monotonic() {
        let spp = planted();
        let config = SsgaConfig::default()
            .with_population_size(30)
            .with_generations(100)
            .with_parallel(true)
            .with_seed(21);

        let a = SsgaRunner::run(&spp, &config).unwrap();
        let b = SsgaRunner::run(&spp, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
        for window in a.fitness_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }
}
