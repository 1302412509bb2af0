//! Elitist survivor selection and parent draw.
//!
//! Each generation the top-ranked tours are carried into the next
//! generation unchanged; the same survivor set doubles as the breeding
//! pool from which parents are drawn uniformly at random, one draw per
//! parent per reproduction event. Elitism is what keeps the best-so-far
//! fitness monotone across generations.

use crate::types::Tour;
use rand::Rng;

/// Number of top-ranked tours carried unchanged into the next generation.
///
/// `round(population_size × survival_rate)`, clamped to
/// `[1, population_size]`: at least one tour always survives so the best
/// is never lost, and at most the whole population survives.
pub fn survivor_count(population_size: usize, survival_rate: f64) -> usize {
    let count = (population_size as f64 * survival_rate).round() as usize;
    count.clamp(1, population_size)
}

/// Draws one parent uniformly at random from the breeding pool.
///
/// # Panics
/// Panics if the pool is empty.
pub fn pick_parent<'a, R: Rng>(pool: &'a [Tour], rng: &mut R) -> &'a Tour {
    assert!(!pool.is_empty(), "cannot select from an empty breeding pool");
    &pool[rng.random_range(0..pool.len())]
}
