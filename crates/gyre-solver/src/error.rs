//! Solver error types.

use crate::satellite::SatelliteId;

/// Errors from satellite registration and removal.
///
/// Numeric degeneracies (two satellites sharing an exact position) are not
/// represented here; they are a documented precondition of
/// [`OrbitSolver::step`](crate::OrbitSolver::step), not a recoverable error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// An `add` used an id that is already registered.
    #[error("satellite {0} is already registered")]
    DuplicateId(SatelliteId),

    /// A `remove` or lookup referenced an unknown id.
    #[error("satellite {0} is not registered")]
    NotFound(SatelliteId),
}
