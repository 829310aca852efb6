//! Core trait definitions for NP-hard problems.
//!
//! [`NpProblem`] is the contract between the generic search drivers and a
//! concrete problem. Drivers never inspect solution internals; they only go
//! through these operations.

use rand::Rng;
use std::cmp::Ordering;

/// Defines an NP-hard optimization problem.
///
/// Solutions are transient values: the problem owns none of them, it only
/// creates, scores and recombines them.
///
/// # Minimization
///
/// [`value`](NpProblem::value) is lower-is-better and must be finite for every
/// representable solution, including infeasible ones (score them through a
/// penalty term), so that comparison always succeeds.
///
/// # Thread Safety
///
/// `NpProblem` must be `Send + Sync` because the GA runner may improve and
/// evaluate children in parallel using rayon.
pub trait NpProblem: Send + Sync {
    /// The solution encoding.
    type Solution: Clone + Send + Sync;

    /// Problem size `n`, the length of every solution.
    fn size(&self) -> usize;

    /// Returns `true` iff `solution` satisfies all domain constraints.
    ///
    /// Must be a pure function of `solution` and the problem state.
    fn validate(&self, solution: &Self::Solution) -> bool;

    /// Fitness of `solution`. Lower is better.
    fn value(&self, solution: &Self::Solution) -> f64;

    /// Produces a random candidate solution. It need not be feasible.
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Recombines two parents into exactly two children.
    fn crossover<R: Rng>(
        &self,
        a: &Self::Solution,
        b: &Self::Solution,
        rng: &mut R,
    ) -> [Self::Solution; 2];

    /// Produces `count` perturbed variants of `solution`.
    ///
    /// `rate` is the per-element perturbation probability; `None` selects
    /// the problem's own default. Implementations decide how to treat rates
    /// outside `[0, 1]` or NaN and document it; [`SppProblem`] falls back to
    /// its default on NaN and clamps the rest.
    ///
    /// [`SppProblem`]: crate::spp::SppProblem
    fn mutate<R: Rng>(
        &self,
        solution: &Self::Solution,
        rate: Option<f64>,
        count: usize,
        rng: &mut R,
    ) -> Vec<Self::Solution>;

    /// Compares two solutions by [`value`](NpProblem::value).
    ///
    /// **Inverted convention**: returns [`Ordering::Greater`] if `a` is
    /// strictly better (lower value) than `b`, [`Ordering::Less`] if `b` is
    /// better, and [`Ordering::Equal`] when the values tie or are unordered.
    fn compare(&self, a: &Self::Solution, b: &Self::Solution) -> Ordering {
        let (va, vb) = (self.value(a), self.value(b));
        if va < vb {
            Ordering::Greater
        } else if vb < va {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

/// Tie-break policy of a neighborhood scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Improvement {
    /// Evaluate every move and apply the single best strictly improving one.
    #[default]
    Best,
    /// Apply the first strictly improving move, in scan order.
    First,
}

/// A problem-specific improvement heuristic.
///
/// `improve` must never return a solution with a worse
/// [`value`](NpProblem::value) than its input, and must not mutate the input.
pub trait LocalSearch: NpProblem {
    /// Parameters selecting how the neighborhood is explored.
    type Strategy: Copy + Default + std::fmt::Debug + Send + Sync;

    /// Runs one local-search pass on `solution`.
    ///
    /// Returns either an improved solution or an unchanged copy.
    fn improve<R: Rng>(
        &self,
        solution: &Self::Solution,
        strategy: &Self::Strategy,
        rng: &mut R,
    ) -> Self::Solution;
}
