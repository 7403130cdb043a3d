//! Satellite state and the normalized spherical position encoding.

use std::f64::consts::{PI, TAU};
use std::fmt;

use glam::DVec3;

/// Opaque satellite key, supplied by the caller and unique among live
/// satellites. Also the join key between solver state and whatever visual
/// resource the scene host keeps for the same satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SatelliteId(u64);

impl SatelliteId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SatelliteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visual category of a satellite.
///
/// The solver carries this unchanged; only the scene host cares, using it to
/// pick the polyhedral shape, size, and color of the visual object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SatelliteKind {
    /// Larger octahedral marker.
    Beacon,
    /// Smaller tetrahedral marker.
    Probe,
}

/// A point on the unit sphere encoded as `(x, y) ∈ [0,1]²`.
///
/// `x` maps to the azimuth (`x·2π`, measured from +X toward +Z) and `y` to
/// the polar angle (`y·π`, measured from +Y). So `(0.0, 0.5)` is on the +X
/// axis, `(0.25, 0.5)` on the +Z axis, and `(anything, 0.0)` at the north
/// pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPos {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to Cartesian coordinates on the sphere of the given radius,
    /// Y up, centered at the origin.
    pub fn to_cartesian(self, radius: f64) -> DVec3 {
        let azimuth = self.x * TAU;
        let polar = self.y * PI;
        DVec3::new(
            radius * polar.sin() * azimuth.cos(),
            radius * polar.cos(),
            radius * polar.sin() * azimuth.sin(),
        )
    }
}

/// Per-satellite solver state.
///
/// `position` and `target` both sit on the orbit sphere at every observable
/// time. `target` is fixed at creation; a satellite that reaches it simply
/// stays (the pull decays to zero with distance, there is no completion
/// event).
#[derive(Debug, Clone)]
pub struct Satellite {
    pub kind: SatelliteKind,
    pub position: DVec3,
    pub target: DVec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn equator_points_map_to_axes() {
        let r = 10.0;
        assert!(close(
            NormalizedPos::new(0.0, 0.5).to_cartesian(r),
            DVec3::new(10.0, 0.0, 0.0)
        ));
        assert!(close(
            NormalizedPos::new(0.25, 0.5).to_cartesian(r),
            DVec3::new(0.0, 0.0, 10.0)
        ));
        assert!(close(
            NormalizedPos::new(0.5, 0.5).to_cartesian(r),
            DVec3::new(-10.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn poles_map_to_y_axis() {
        let r = 3.0;
        assert!(close(
            NormalizedPos::new(0.7, 0.0).to_cartesian(r),
            DVec3::new(0.0, 3.0, 0.0)
        ));
        assert!(close(
            NormalizedPos::new(0.1, 1.0).to_cartesian(r),
            DVec3::new(0.0, -3.0, 0.0)
        ));
    }

    #[test]
    fn conversion_preserves_radius() {
        for &(x, y) in &[(0.13, 0.42), (0.99, 0.01), (0.5, 0.77)] {
            let p = NormalizedPos::new(x, y).to_cartesian(7.5);
            assert!((p.length() - 7.5).abs() < 1e-9);
        }
    }
}
