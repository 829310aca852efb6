//! Parent selection for the steady-state GA.
//!
//! Selection works on the population's fitness cache only; it never looks
//! at solutions. All functions assume **minimization** (lower fitness =
//! better).
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

/// Binary tournament: draw two indices uniformly with replacement and
/// return the fitter one. Ties go to the first draw.
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn binary_tournament<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");
    let n = fitness.len();
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if fitness[b] < fitness[a] {
        b
    } else {
        a
    }
}

/// Builds a breeding candidate set of `count` distinct indices by repeated
/// binary tournaments, in the order they were first won.
///
/// Tournament winners already in the set are skipped. `count` is capped at
/// the population size.
pub fn select_candidates<R: Rng>(fitness: &[f64], count: usize, rng: &mut R) -> Vec<usize> {
    let count = count.min(fitness.len());
    let mut taken = vec![false; fitness.len()];
    let mut candidates = Vec::with_capacity(count);
    while candidates.len() < count {
        let winner = binary_tournament(fitness, rng);
        if !taken[winner] {
            taken[winner] = true;
            candidates.push(winner);
        }
    }
    candidates
}
