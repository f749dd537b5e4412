//! Error type shared by problem construction and solver configuration.

use thiserror::Error;

/// Errors reported when building a problem instance or validating a
/// solver configuration.
///
/// Cost evaluation and the solvers themselves never fail: malformed tours
/// are a caller bug and are not checked on the hot path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// The initial SA temperature is not strictly positive.
    #[error("initial_temperature must be positive, got {0}")]
    InvalidTemperature(f64),

    /// The geometric cooling rate lies outside the open interval (0, 1).
    #[error("cooling_rate must be in (0, 1), got {0}")]
    InvalidCoolingRate(f64),

    /// The SA iteration budget is zero.
    #[error("max_iterations must be at least 1")]
    ZeroIterations,

    /// The number of steps per batch is zero.
    #[error("batch_size must be at least 1")]
    ZeroBatchSize,

    /// A point's identifier does not match its position in the instance.
    #[error("point at index {index} has id {id}; ids must be 0..N in order")]
    MismatchedId {
        /// Position of the offending point.
        index: usize,
        /// Identifier it carried.
        id: usize,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("point {id} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Identifier of the offending point.
        id: usize,
    },

    /// A solver name could not be parsed.
    #[error("unknown solver: {0}")]
    UnknownSolver(String),
}
