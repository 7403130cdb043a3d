//! Satellite registry and surface motion solver.
//!
//! Owns the simulation half of the sphere-map widget: a set of satellites
//! pinned to a fixed-radius orbit sphere, each drifting from its spawn point
//! toward a fixed target under mutual repulsion. The solver never touches
//! rendering; the scene host reads positions back after each [`OrbitSolver::step`]
//! and places its own visual objects (see `gyre-scene`).

mod error;
mod satellite;
mod solver;

pub use error::SolverError;
pub use satellite::{NormalizedPos, Satellite, SatelliteId, SatelliteKind};
pub use solver::OrbitSolver;
