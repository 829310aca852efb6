//! Row-oriented local search (the ROW heuristic).
//!
//! One pass picks a single constraint row, then tries flipping each
//! currently-selected set that covers it. Only moves touching that row are
//! considered, which keeps a pass at `O(k * nnz)` for a row covered by `k`
//! selected sets.

use super::model::SppProblem;
use crate::bits::{BitVector, BitView};
use crate::problem::{Improvement, LocalSearch, NpProblem};
use log::trace;
use rand::Rng;

/// How the target row of a local-search pass is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowSelection {
    /// The row covered by the most selected sets. Ties go to the lowest
    /// row index.
    #[default]
    Max,
    /// A uniformly random row.
    Random,
}

/// Local-search strategy for [`SppProblem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowStrategy {
    /// Which improving flip to apply.
    pub improvement: Improvement,
    /// Which row to work on.
    pub row_selection: RowSelection,
}

impl RowStrategy {
    /// Creates a strategy.
    pub fn new(improvement: Improvement, row_selection: RowSelection) -> Self {
        Self {
            improvement,
            row_selection,
        }
    }
}

impl SppProblem {
    /// Picks the target row and returns it with the selected sets covering it.
    ///
    /// Returns `None` for an instance without rows. Under
    /// [`RowSelection::Random`] the set list may be empty.
    pub(crate) fn select_row<R: Rng>(
        &self,
        solution: BitView<'_>,
        selection: RowSelection,
        rng: &mut R,
    ) -> Option<(usize, Vec<usize>)> {
        if self.rows() == 0 {
            return None;
        }

        let row = match selection {
            RowSelection::Max => {
                let cover = self.coverage(solution);
                let mut best = 0;
                for (row, &count) in cover.iter().enumerate().skip(1) {
                    if count > cover[best] {
                        best = row;
                    }
                }
                best
            }
            RowSelection::Random => rng.random_range(0..self.rows()),
        };

        let covering = self
            .row_sets(row)
            .iter()
            .copied()
            .filter(|&j| solution.get(j))
            .collect();
        Some((row, covering))
    }
}

impl LocalSearch for SppProblem {
    type Strategy = RowStrategy;

    fn improve<R: Rng>(
        &self,
        solution: &BitVector,
        strategy: &RowStrategy,
        rng: &mut R,
    ) -> BitVector {
        let Some((row, candidates)) =
            self.select_row(solution.view(), strategy.row_selection, rng)
        else {
            return solution.clone();
        };

        let current = self.value(solution);
        let mut scratch = solution.clone();

        match strategy.improvement {
            Improvement::Best => {
                let mut best: Option<(usize, f64)> = None;
                for &j in &candidates {
                    scratch.toggle(j);
                    let v = self.value(&scratch);
                    scratch.toggle(j);
                    if v < best.map_or(current, |(_, b)| b) {
                        best = Some((j, v));
                    }
                }
                if let Some((j, v)) = best {
                    trace!("row {row}: flip set {j}, {current} -> {v}");
                    scratch.toggle(j);
                }
            }
            Improvement::First => {
                for &j in &candidates {
                    scratch.toggle(j);
                    let v = self.value(&scratch);
                    if v < current {
                        trace!("row {row}: flip set {j}, {current} -> {v}");
                        return scratch;
                    }
                    scratch.toggle(j);
                }
            }
        }

        scratch
    }
}
