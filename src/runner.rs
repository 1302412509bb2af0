//! Generation loop execution.
//!
//! [`SimulationRunner`] orchestrates the complete evolutionary process:
//! parse → validate → initialize → (rank → select → reproduce → mutate →
//! replace) × iterations → best tour.

use crate::cities::CityTable;
use crate::config::SimulationConfig;
use crate::error::Error;
use crate::fitness::tour_length;
use crate::operators::{order_crossover, swap_mutation};
use crate::population::Population;
use crate::selection;
use crate::types::Tour;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a simulation run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Visitation order of the best tour found: a permutation of
    /// `0..city_count`. The tour is closed — the last city connects back
    /// to the first.
    pub path: Vec<usize>,

    /// Total length of the closed tour (lower is better).
    pub fitness: f64,

    /// Number of generations executed (always the configured
    /// `iterations`).
    pub generations: usize,

    /// Best-so-far fitness after initialization and after each
    /// generation: `iterations + 1` entries, non-increasing.
    pub fitness_history: Vec<f64>,
}

/// Executes the generation loop.
///
/// One invocation owns all of its working state — city table,
/// population, best-so-far, random source — and discards everything but
/// the result when it returns. Nothing is shared across runs, so
/// concurrent runs need no locking.
///
/// A run always executes its full iteration count: there is no
/// convergence detection and no cancellation. Under large
/// `iterations × population_size` the call blocks accordingly; callers
/// needing responsiveness must size their parameters up front.
///
/// # Usage
///
/// ```
/// use tsp_evolve::{SimulationConfig, SimulationRunner};
///
/// let config = SimulationConfig::default()
///     .with_iterations(100)
///     .with_population_size(30)
///     .with_seed(42);
/// let result = SimulationRunner::run("0,0;0,10;10,10;10,0", &config).unwrap();
/// assert_eq!(result.path.len(), 4);
/// ```
pub struct SimulationRunner;

impl SimulationRunner {
    /// Parses the city string, validates the configuration, and runs the
    /// loop.
    ///
    /// # Errors
    /// All failures are reported before any computation starts:
    /// [`ParseError`](crate::ParseError) for a malformed city string,
    /// [`ValidationError`](crate::ValidationError) for an out-of-range
    /// parameter or too few cities.
    pub fn run(input: &str, config: &SimulationConfig) -> Result<SimulationResult, Error> {
        config.validate()?;
        let cities = CityTable::parse(input)?;
        Self::run_cities(&cities, config)
    }

    /// Runs the loop on a pre-parsed city table.
    pub fn run_cities(
        cities: &CityTable,
        config: &SimulationConfig,
    ) -> Result<SimulationResult, Error> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // 1. Initialize and evaluate the starting population
        let mut population = Population::random(cities.len(), config.population_size, &mut rng)?;
        population.evaluate(cities);

        // 2. Track best-so-far
        let mut best = population.best().clone();
        let mut fitness_history = Vec::with_capacity(config.iterations + 1);
        fitness_history.push(best.fitness());

        // 3. Generation loop
        for _gen in 0..config.iterations {
            population.rank(cities);

            // Elitism: the top-ranked tours survive unchanged and form
            // the breeding pool.
            let survivor_count =
                selection::survivor_count(config.population_size, config.survival_rate);
            let mut next_gen: Vec<Tour> = population.tours()[..survivor_count].to_vec();
            let pool = &population.tours()[..survivor_count];

            // Reproduce until the next generation is full
            while next_gen.len() < config.population_size {
                let parent_a = selection::pick_parent(pool, &mut rng);
                let parent_b = selection::pick_parent(pool, &mut rng);

                let order = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    order_crossover(parent_a.order(), parent_b.order(), &mut rng)
                } else {
                    // No crossover: the child is a copy of one parent
                    let donor = if rng.random_bool(0.5) { parent_a } else { parent_b };
                    donor.order().to_vec()
                };
                let mut child = Tour::from_order(order);

                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    swap_mutation(child.order_mut(), &mut rng);
                }

                child.set_fitness(tour_length(cities, child.order()));
                next_gen.push(child);
            }

            population.replace(next_gen);

            // Survivors guarantee the previous best is still present, so
            // best-so-far fitness can only improve.
            let gen_best = population.best();
            if gen_best.fitness() < best.fitness() {
                best = gen_best.clone();
            }
            fitness_history.push(best.fitness());
        }

        let fitness = best.fitness();
        Ok(SimulationResult {
            path: best.into_order(),
            fitness,
            generations: config.iterations,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
