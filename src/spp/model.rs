//! Set Partitioning Problem model.

use crate::bits::{BitVector, BitView};
use crate::error::{Error, Result};
use crate::ga::operators::{bit_flip_mutation, window_crossover};
use crate::problem::NpProblem;
use log::debug;
use rand::Rng;

/// Penalty multiplier used by [`SppProblem::new`].
pub const DEFAULT_PENALTY_FACTOR: f64 = 1.0;

/// A Set Partitioning Problem instance.
///
/// Choose a subset of the `n` sets so that every one of the `rows` rows is
/// covered by exactly one chosen set, at minimum total cost. A solution is a
/// [`BitVector`] of length `n` where bit `j` selects set `j`.
///
/// Infeasible solutions are scored rather than rejected: every row adds
/// `|cover - 1| * penalty` to the cost, where `cover` is the number of
/// selected sets containing it and `penalty = mean(costs) * penalty_factor`.
///
/// # Examples
///
/// ```
/// use u_nphard::bits::BitVector;
/// use u_nphard::problem::NpProblem;
/// use u_nphard::spp::SppProblem;
///
/// let spp = SppProblem::new(3, vec![vec![0], vec![1], vec![2], vec![0, 1, 2]], vec![1.0; 4])?;
/// let one_set: BitVector = "0001".parse()?;
/// assert!(spp.validate(&one_set));
/// assert_eq!(spp.value(&one_set), 1.0);
/// # Ok::<(), u_nphard::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SppProblem {
    rows: usize,
    sets: Vec<Vec<usize>>,
    costs: Vec<f64>,
    penalty: f64,
    /// Row -> indices of the sets covering it, ascending.
    row_sets: Vec<Vec<usize>>,
    average_non_zeros: f64,
}

impl SppProblem {
    /// Builds an instance with the default penalty factor of 1.
    ///
    /// # Errors
    /// See [`with_penalty_factor`](Self::with_penalty_factor).
    pub fn new(rows: usize, sets: Vec<Vec<usize>>, costs: Vec<f64>) -> Result<Self> {
        Self::with_penalty_factor(rows, sets, costs, DEFAULT_PENALTY_FACTOR)
    }

    /// Builds an instance.
    ///
    /// Each set's row indices are sorted and de-duplicated.
    ///
    /// # Errors
    /// - [`Error::LengthMismatch`] if `sets` and `costs` differ in length
    /// - [`Error::InvalidParameter`] if `penalty_factor` is negative or not finite
    /// - [`Error::InvalidCost`] if a cost is negative or not finite
    /// - [`Error::RowOutOfRange`] if a set references a row `>= rows`
    pub fn with_penalty_factor(
        rows: usize,
        mut sets: Vec<Vec<usize>>,
        costs: Vec<f64>,
        penalty_factor: f64,
    ) -> Result<Self> {
        if sets.len() != costs.len() {
            return Err(Error::LengthMismatch {
                sets: sets.len(),
                costs: costs.len(),
            });
        }
        if !penalty_factor.is_finite() || penalty_factor < 0.0 {
            return Err(Error::invalid(
                "penalty_factor",
                format!("must be finite and non-negative, got {penalty_factor}"),
            ));
        }
        if let Some((set, &cost)) = costs
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite() || **c < 0.0)
        {
            return Err(Error::InvalidCost { set, cost });
        }

        for (set, members) in sets.iter_mut().enumerate() {
            members.sort_unstable();
            members.dedup();
            if let Some(&row) = members.last().filter(|&&r| r >= rows) {
                return Err(Error::RowOutOfRange { set, row, rows });
            }
        }

        let mut row_sets = vec![Vec::new(); rows];
        for (j, members) in sets.iter().enumerate() {
            for &row in members {
                row_sets[row].push(j);
            }
        }

        let penalty = mean(costs.iter().copied()) * penalty_factor;
        let average_non_zeros = mean(sets.iter().map(|s| s.len() as f64));

        debug!(
            "spp instance: {} rows, {} sets, penalty {:.4}, {:.2} rows per set",
            rows,
            sets.len(),
            penalty,
            average_non_zeros
        );

        Ok(Self {
            rows,
            sets,
            costs,
            penalty,
            row_sets,
            average_non_zeros,
        })
    }

    /// Number of rows `m`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Row indices of every set, each sorted ascending.
    pub fn sets(&self) -> &[Vec<usize>] {
        &self.sets
    }

    /// Per-set costs.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Penalty charged per unit of cover deviation on a row.
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Indices of the sets covering `row`, ascending.
    ///
    /// # Panics
    /// Panics if `row >= rows()`.
    pub fn row_sets(&self, row: usize) -> &[usize] {
        &self.row_sets[row]
    }

    /// Mean number of rows per set.
    pub fn average_non_zeros(&self) -> f64 {
        self.average_non_zeros
    }

    /// Sum of the costs of the selected sets, without penalty.
    pub fn cost_of(&self, solution: &BitVector) -> f64 {
        solution.ones().map(|j| self.costs[j]).sum()
    }

    /// Rows not covered by any selected set.
    pub fn uncovered_rows(&self, solution: &BitVector) -> Vec<usize> {
        self.coverage(solution.view())
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == 0)
            .map(|(row, _)| row)
            .collect()
    }

    /// Number of selected sets covering each row.
    pub(crate) fn coverage(&self, solution: BitView<'_>) -> Vec<usize> {
        let mut cover = vec![0usize; self.rows];
        for j in solution.ones() {
            for &row in &self.sets[j] {
                cover[row] += 1;
            }
        }
        cover
    }

    /// Number of sets [`generate`](NpProblem::generate) selects.
    fn generation_target(&self) -> usize {
        let n = self.sets.len();
        if n == 0 || self.rows == 0 {
            return 0;
        }
        if self.average_non_zeros <= 0.0 {
            return n;
        }
        ((self.rows as f64 / self.average_non_zeros).floor() as usize).min(n)
    }
}

impl NpProblem for SppProblem {
    type Solution = BitVector;

    fn size(&self) -> usize {
        self.sets.len()
    }

    /// Exact cover check: fails on the first row covered twice, then
    /// requires every row to be covered.
    fn validate(&self, solution: &BitVector) -> bool {
        if solution.len() != self.sets.len() {
            return false;
        }
        let mut covered = BitVector::zeros(self.rows);
        for j in solution.ones() {
            for &row in &self.sets[j] {
                if covered.get(row) {
                    return false;
                }
                covered.set(row, true);
            }
        }
        covered.all()
    }

    fn value(&self, solution: &BitVector) -> f64 {
        let deviation: usize = self
            .coverage(solution.view())
            .into_iter()
            .map(|c| c.abs_diff(1))
            .sum();
        deviation as f64 * self.penalty + self.cost_of(solution)
    }

    /// Selects about `rows / average_non_zeros` distinct random sets.
    fn generate<R: Rng>(&self, rng: &mut R) -> BitVector {
        let n = self.sets.len();
        let target = self.generation_target();
        let mut solution = BitVector::zeros(n);
        let mut selected = 0;
        while selected < target {
            let j = rng.random_range(0..n);
            if !solution.get(j) {
                solution.set(j, true);
                selected += 1;
            }
        }
        solution
    }

    /// Wrap-around window crossover with a random window length in
    /// `[1, n - 1)`, followed by a `1/n` bit-flip pass over both children.
    fn crossover<R: Rng>(&self, a: &BitVector, b: &BitVector, rng: &mut R) -> [BitVector; 2] {
        let n = self.sets.len();
        if n == 0 {
            return [a.clone(), b.clone()];
        }
        let start = rng.random_range(0..n);
        let distance = if n < 3 { 1 } else { rng.random_range(1..n - 1) };
        let (mut c1, mut c2) = window_crossover(a, b, start, distance);

        let rate = 1.0 / n as f64;
        bit_flip_mutation(&mut c1, rate, rng);
        bit_flip_mutation(&mut c2, rate, rng);
        [c1, c2]
    }

    /// Bit-flip variants. `rate` defaults to `1/n`; a NaN rate is treated as
    /// absent and other rates are clamped to `[0, 1]`, so this never panics.
    fn mutate<R: Rng>(
        &self,
        solution: &BitVector,
        rate: Option<f64>,
        count: usize,
        rng: &mut R,
    ) -> Vec<BitVector> {
        let n = self.sets.len().max(1);
        let rate = rate
            .filter(|r| !r.is_nan())
            .unwrap_or(1.0 / n as f64)
            .clamp(0.0, 1.0);
        (0..count)
            .map(|_| {
                let mut variant = solution.clone();
                bit_flip_mutation(&mut variant, rate, rng);
                variant
            })
            .collect()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
