//! Permutation genetic operators.
//!
//! Crossover and mutation operate on raw `&[usize]` index slices so they
//! stay independent of tour bookkeeping; the runner wires them to
//! [`Tour`](crate::Tour) values and applies the configured rates.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

/// Order Crossover (OX) for permutations.
///
/// The child inherits a contiguous segment of `parent_a` verbatim and
/// the **relative order** of the remaining cities from `parent_b`.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Pick two random cut points `start <= end`
/// 2. Copy `parent_a[start..=end]` into the child at the same positions
/// 3. Fill the remaining positions with the cities of `parent_b` not in
///    the segment, in `parent_b`'s order, starting at `end + 1` and
///    wrapping around
///
/// The child is a valid permutation by construction: every city appears
/// exactly once.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent_a.to_vec();
    }

    let (start, end) = random_segment(n, rng);

    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = parent_a[i];
        in_segment[parent_a[i]] = true;
    }

    // Fill from parent_b, starting after the segment, wrapping around.
    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let donor = parent_b[(end + 1 + offset) % n];
        if !in_segment[donor] {
            child[pos] = donor;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Swap mutation: exchange two distinct random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    // Offset in 1..n keeps the second position distinct from the first.
    let j = (i + rng.random_range(1..n)) % n;
    perm.swap(i, j);
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use std::collections::HashSet;

    /// Check that a slice is a valid permutation of 0..n.
    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let set: HashSet<usize> = perm.iter().copied().collect();
        set.len() == n && perm.iter().all(|&v| v < n)
    }

    // ---- Order crossover ----

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];

        for _ in 0..100 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 8), "OX child not valid: {child:?}");
        }
    }

    #[test]
    fn test_ox_identical_parents_reproduce_parent() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = vec![3, 0, 4, 1, 2];
        for _ in 0..20 {
            assert_eq!(order_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    fn test_ox_two_elements() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![0, 1];
        let p2 = vec![1, 0];

        for _ in 0..20 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 2));
        }
    }

    #[test]
    fn test_ox_child_keeps_a_segment_of_parent_a() {
        let mut rng = StdRng::seed_from_u64(7);
        let p1: Vec<usize> = (0..12).collect();
        let mut p2: Vec<usize> = (0..12).collect();
        p2.reverse();

        // Every child must share at least one position with parent_a
        // (the inherited segment is never empty).
        for _ in 0..50 {
            let child = order_crossover(&p1, &p2, &mut rng);
            let shared = child.iter().zip(&p1).filter(|(c, p)| c == p).count();
            assert!(shared >= 1, "child shares no position with parent_a: {child:?}");
        }
    }

    // ---- Swap mutation ----

    #[test]
    fn test_swap_preserves_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut perm: Vec<usize> = (0..10).collect();
            swap_mutation(&mut perm, &mut rng);
            assert!(is_valid_permutation(&perm, 10));
        }
    }

    #[test]
    fn test_swap_changes_exactly_two_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<usize> = (0..10).collect();
        for _ in 0..100 {
            let mut perm = original.clone();
            swap_mutation(&mut perm, &mut rng);
            let moved = original.iter().zip(&perm).filter(|(a, b)| a != b).count();
            assert_eq!(moved, 2, "swap positions must be distinct: {perm:?}");
        }
    }

    #[test]
    fn test_swap_two_elements_always_swaps() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perm = vec![0, 1];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![1, 0]);
    }

    #[test]
    fn test_swap_single_element_is_noop() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    // ---- Random segment helper ----

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }

    // ---- Property tests ----

    proptest! {
        #[test]
        fn prop_ox_always_yields_permutation(seed in any::<u64>(), n in 2usize..48) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut p1: Vec<usize> = (0..n).collect();
            let mut p2: Vec<usize> = (0..n).collect();
            p1.shuffle(&mut rng);
            p2.shuffle(&mut rng);

            let child = order_crossover(&p1, &p2, &mut rng);
            prop_assert!(is_valid_permutation(&child, n), "invalid child: {child:?}");
        }

        #[test]
        fn prop_swap_always_yields_permutation(seed in any::<u64>(), n in 2usize..48) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut perm: Vec<usize> = (0..n).collect();
            perm.shuffle(&mut rng);

            swap_mutation(&mut perm, &mut rng);
            prop_assert!(is_valid_permutation(&perm, n), "invalid permutation: {perm:?}");
        }
    }
}
