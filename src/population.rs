//! Population ownership and fitness ranking.
//!
//! A [`Population`] owns one generation's candidate tours. It is created
//! once per run (randomized) and then replaced wholesale each
//! generation; the old and new buffers never alias.

use crate::cities::CityTable;
use crate::error::ValidationError;
use crate::fitness::tour_length;
use crate::types::Tour;
use rand::Rng;
use std::cmp::Ordering;

/// The current generation's candidate tours.
#[derive(Debug, Clone)]
pub struct Population {
    tours: Vec<Tour>,
}

impl Population {
    /// Creates `size` independent uniformly-random tours over
    /// `0..city_count`.
    ///
    /// # Errors
    /// [`ValidationError::PopulationTooSmall`] if `size < 2`.
    pub fn random<R: Rng>(
        city_count: usize,
        size: usize,
        rng: &mut R,
    ) -> Result<Self, ValidationError> {
        if size < 2 {
            return Err(ValidationError::PopulationTooSmall(size));
        }
        let tours = (0..size).map(|_| Tour::random(city_count, rng)).collect();
        Ok(Self { tours })
    }

    /// Evaluates every tour whose fitness cache is stale.
    pub fn evaluate(&mut self, cities: &CityTable) {
        for tour in &mut self.tours {
            if !tour.is_evaluated() {
                tour.set_fitness(tour_length(cities, tour.order()));
            }
        }
    }

    /// Evaluates stale tours, then sorts ascending by fitness (best
    /// first).
    ///
    /// The sort is stable: ties keep their current population order, so
    /// a fixed seed reproduces an identical ranking.
    pub fn rank(&mut self, cities: &CityTable) {
        self.evaluate(cities);
        self.tours.sort_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(Ordering::Equal)
        });
    }

    /// The tour with the lowest fitness. Among ties, the earliest in
    /// population order.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best(&self) -> &Tour {
        self.tours
            .iter()
            .min_by(|a, b| {
                a.fitness()
                    .partial_cmp(&b.fitness())
                    .unwrap_or(Ordering::Equal)
            })
            .expect("population must not be empty")
    }

    /// All tours, in current order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Number of tours.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Replaces the whole population with the next generation.
    pub(crate) fn replace(&mut self, next: Vec<Tour>) {
        debug_assert_eq!(next.len(), self.tours.len());
        self.tours = next;
    }
}
