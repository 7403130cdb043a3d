//! Scene-host state that is not rendering: the visual-resource registry,
//! per-kind satellite styling, placement/orientation math, and the planet's
//! self-rotation clock.
//!
//! The solver (`gyre-solver`) owns `id → {position, target}`; this crate owns
//! `id → visual resource`. The two maps are joined only by the satellite id,
//! so neither side holds references into the other.

mod orient;
mod registry;
mod spin;
mod style;

pub use orient::face_center;
pub use registry::VisualRegistry;
pub use spin::SphereSpin;
pub use style::{GLOW_SCALE, KindStyle, SatelliteShape, StyleSet, glow_radius};
