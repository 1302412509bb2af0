//! Permutation chromosome.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// One candidate tour: a permutation of city indices plus a cached
/// fitness.
///
/// The permutation invariant — every index in `0..n` appears exactly
/// once — holds after every operation that produces or modifies a tour.
/// The fitness cache starts at the unevaluated sentinel and is valid
/// only until the next modification of the order;
/// [`Population`](crate::Population) re-evaluates stale tours before
/// ranking.
#[derive(Debug, Clone)]
pub struct Tour {
    order: Vec<usize>,
    fitness: f64,
}

impl Tour {
    /// Sentinel fitness for tours that have not been evaluated yet.
    /// Infinity sorts after every real tour length.
    pub(crate) const UNEVALUATED: f64 = f64::INFINITY;

    /// Creates a uniformly-random permutation of `0..city_count`.
    ///
    /// Uses a Fisher–Yates shuffle, so every permutation is equally
    /// probable.
    pub fn random<R: Rng>(city_count: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..city_count).collect();
        order.shuffle(rng);
        Self::from_order(order)
    }

    /// Wraps an existing visitation order as an unevaluated tour.
    pub fn from_order(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: Self::UNEVALUATED,
        }
    }

    /// The visitation order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour, returning the visitation order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Cached tour length; `f64::INFINITY` while unevaluated.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Whether the cached fitness is current.
    pub fn is_evaluated(&self) -> bool {
        self.fitness != Self::UNEVALUATED
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Mutable access to the order. Invalidates the fitness cache.
    pub(crate) fn order_mut(&mut self) -> &mut [usize] {
        self.fitness = Self::UNEVALUATED;
        &mut self.order
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order: Vec<String> = self.order.iter().map(|i| i.to_string()).collect();
        write!(f, "Fitness: {}, Path: {}", self.fitness, order.join("->"))
    }
}
