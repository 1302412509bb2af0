//! Error taxonomy for the engine.
//!
//! All failures are detected synchronously before the generation loop
//! starts: the input string either parses or it does not, and the
//! parameters either validate or they do not. Once a run enters the loop
//! it always completes — there is no I/O and no mid-run failure mode.

/// Failure to parse the raw city string.
///
/// Non-retryable until the input is corrected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// An entry did not split into exactly two coordinate tokens.
    #[error("MalformedEntry: entry {index} ({entry:?}) is not an x,y pair")]
    MalformedEntry { index: usize, entry: String },

    /// A coordinate token failed numeric parsing.
    #[error("NotANumber: entry {index} token {token:?}")]
    NotANumber { index: usize, token: String },
}

/// A parameter or input violating a precondition of the run.
///
/// Reported before entering the generation loop; out-of-range values are
/// rejected, never clamped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Fewer than two cities in the input.
    #[error("TooFewCities: a tour needs at least 2 cities, got {0}")]
    TooFewCities(usize),

    /// `population_size` below the minimum of 2.
    #[error("PopulationTooSmall: population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// `iterations` must be at least 1.
    #[error("ZeroIterations: iterations must be at least 1")]
    ZeroIterations,

    /// A rate parameter outside `[0.0, 1.0]`.
    #[error("RateOutOfRange: {name} must be within [0.0, 1.0], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
}

/// Top-level error returned by [`SimulationRunner::run`](crate::SimulationRunner::run).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),

    #[error("ValidationError: {0}")]
    Validation(#[from] ValidationError),
}
