//! Generic bit-string genetic operators.
//!
//! Crossover and mutation operators for [`BitVector`] chromosomes. They are
//! purely structural: no feasibility or fitness check is performed, and the
//! parents are never modified.
//!
//! # Crossover Operators
//!
//! - [`two_point_crossover`] (TPX): exchanges a wrap-around run of
//!   `ceil(n * x_factor)` bits starting at a random position
//! - [`window_crossover`]: the same exchange with an explicit window
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: flips each bit independently with a fixed
//!   probability — O(n)
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Chu & Beasley (1998), "Constraint Handling in Genetic Algorithms: The Set
//!   Partitioning Problem"

use crate::bits::BitVector;
use rand::Rng;

/// Default fraction of bits exchanged by [`two_point_crossover`].
pub const DEFAULT_CROSSOVER_FACTOR: f64 = 0.5;

// ============================================================================
// Crossover operators
// ============================================================================

/// Two-point wrap-around crossover (TPX).
///
/// Picks a uniformly random start `x` in `[0, n)` and exchanges the
/// `ceil(n * x_factor)` bits at positions `(x + i) mod n`. `child1` is `a`
/// with that window taken from `b`; `child2` is the symmetric construction.
///
/// With `x_factor = 1.0` the children are exact swaps of the parents.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or `x_factor` is outside `[0, 1]`.
pub fn two_point_crossover<R: Rng>(
    a: &BitVector,
    b: &BitVector,
    x_factor: f64,
    rng: &mut R,
) -> (BitVector, BitVector) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    assert!(
        (0.0..=1.0).contains(&x_factor),
        "x_factor must be in [0, 1], got {x_factor}"
    );

    if n == 0 {
        return (a.clone(), b.clone());
    }

    let start = rng.random_range(0..n);
    let distance = (n as f64 * x_factor).ceil() as usize;
    window_crossover(a, b, start, distance)
}

/// Exchanges the wrap-around window of `distance` bits beginning at `start`.
///
/// `distance` is capped at `n`, so the window never revisits a position.
///
/// # Panics
/// Panics if parents have different lengths, or if `start >= n` for
/// non-empty parents.
pub fn window_crossover(
    a: &BitVector,
    b: &BitVector,
    start: usize,
    distance: usize,
) -> (BitVector, BitVector) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");

    let mut child1 = a.clone();
    let mut child2 = b.clone();
    if n == 0 {
        return (child1, child2);
    }
    assert!(start < n, "window start {start} out of range for length {n}");

    for i in 0..distance.min(n) {
        let idx = (start + i) % n;
        child1.set(idx, b.get(idx));
        child2.set(idx, a.get(idx));
    }

    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips every bit independently with probability `rate`.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn bit_flip_mutation<R: Rng>(bits: &mut BitVector, rate: f64, rng: &mut R) {
    for i in 0..bits.len() {
        if rng.random_bool(rate) {
            bits.toggle(i);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn bv(s: &str) -> BitVector {
        s.parse().unwrap()
    }

    // ---- Window crossover ----

    #[test]
    fn test_window_wraps_around() {
        let a = bv("0000");
        let b = bv("1111");
        let (c1, c2) = window_crossover(&a, &b, 3, 2);
        assert_eq!(c1.to_string(), "1001");
        assert_eq!(c2.to_string(), "0110");
    }

    #[test]
    fn test_window_does_not_touch_parents() {
        let a = bv("0101");
        let b = bv("1010");
        let _ = window_crossover(&a, &b, 0, 2);
        assert_eq!(a.to_string(), "0101");
        assert_eq!(b.to_string(), "1010");
    }

    #[test]
    fn test_window_distance_capped() {
        let a = bv("000");
        let b = bv("111");
        let (c1, c2) = window_crossover(&a, &b, 1, 10);
        assert_eq!(c1, b);
        assert_eq!(c2, a);
    }

    // ---- TPX ----

    #[test]
    fn test_tpx_zero_factor_copies_parents() {
        let mut rng = create_rng(42);
        let a = bv("110010");
        let b = bv("001101");
        let (c1, c2) = two_point_crossover(&a, &b, 0.0, &mut rng);
        assert_eq!(c1, a);
        assert_eq!(c2, b);
    }

    #[test]
    fn test_tpx_half_swaps_expected_count() {
        let mut rng = create_rng(7);
        let a = BitVector::zeros(9);
        let b: BitVector = std::iter::repeat(true).take(9).collect();
        for _ in 0..50 {
            let (c1, c2) = two_point_crossover(&a, &b, DEFAULT_CROSSOVER_FACTOR, &mut rng);
            // ceil(9 * 0.5) = 5 positions exchanged
            assert_eq!(c1.count_ones(), 5);
            assert_eq!(c2.count_ones(), 4);
        }
    }

    #[test]
    fn test_tpx_empty_parents() {
        let mut rng = create_rng(1);
        let a = BitVector::zeros(0);
        let (c1, c2) = two_point_crossover(&a, &a, 0.5, &mut rng);
        assert!(c1.is_empty() && c2.is_empty());
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_tpx_length_mismatch_panics() {
        let mut rng = create_rng(1);
        two_point_crossover(&BitVector::zeros(3), &BitVector::zeros(4), 0.5, &mut rng);
    }

    // ---- Bit-flip mutation ----

    #[test]
    fn test_bit_flip_rate_zero_is_identity() {
        let mut rng = create_rng(3);
        let mut v = bv("10110");
        bit_flip_mutation(&mut v, 0.0, &mut rng);
        assert_eq!(v.to_string(), "10110");
    }

    #[test]
    fn test_bit_flip_rate_one_inverts() {
        let mut rng = create_rng(3);
        let mut v = bv("10110");
        bit_flip_mutation(&mut v, 1.0, &mut rng);
        assert_eq!(v.to_string(), "01001");
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_tpx_full_factor_swaps(
            bits in prop::collection::vec(any::<(bool, bool)>(), 1..64),
            seed in any::<u64>(),
        ) {
            let a: BitVector = bits.iter().map(|p| p.0).collect();
            let b: BitVector = bits.iter().map(|p| p.1).collect();
            let mut rng = create_rng(seed);
            let (c1, c2) = two_point_crossover(&a, &b, 1.0, &mut rng);
            prop_assert_eq!(c1, b);
            prop_assert_eq!(c2, a);
        }

        #[test]
        fn prop_tpx_preserves_length_and_alleles(
            bits in prop::collection::vec(any::<(bool, bool)>(), 1..64),
            factor in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let a: BitVector = bits.iter().map(|p| p.0).collect();
            let b: BitVector = bits.iter().map(|p| p.1).collect();
            let mut rng = create_rng(seed);
            let (c1, c2) = two_point_crossover(&a, &b, factor, &mut rng);
            prop_assert_eq!(c1.len(), a.len());
            prop_assert_eq!(c2.len(), b.len());
            for i in 0..a.len() {
                // Every position holds the parents' two alleles, one per child.
                let mut got = [c1.get(i), c2.get(i)];
                let mut want = [a.get(i), b.get(i)];
                got.sort();
                want.sort();
                prop_assert_eq!(got, want);
            }
        }
    }
}
