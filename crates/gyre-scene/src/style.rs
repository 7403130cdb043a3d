//! Per-kind visual parameters for satellite objects.
//!
//! Pure data the rendering layer consumes when it builds meshes and
//! materials; no GPU types here.

use glam::Vec3;

use gyre_solver::SatelliteKind;

/// The glow shell sits at 1.2× the planet radius, and satellites orbit on
/// the same shell.
pub const GLOW_SCALE: f64 = 1.2;

/// Radius of the translucent glow shell for a planet of the given radius.
pub fn glow_radius(sphere_radius: f64) -> f64 {
    sphere_radius * GLOW_SCALE
}

/// Base polyhedron used for a satellite mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatelliteShape {
    Octahedron,
    Tetrahedron,
}

/// Visual parameters for one satellite kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindStyle {
    pub shape: SatelliteShape,
    /// Circumscribed radius of the polyhedron, in scene units.
    pub size: f64,
    /// Linear RGB.
    pub color: Vec3,
}

/// Styles for all satellite kinds, derived from the planet size so
/// satellites scale with the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSet {
    beacon: KindStyle,
    probe: KindStyle,
}

impl StyleSet {
    /// Derive styles for a planet of `sphere_radius`, with per-kind size
    /// divisors (beacons at `radius / beacon_divisor`, probes at
    /// `radius / probe_divisor`).
    pub fn for_sphere(sphere_radius: f64, beacon_divisor: f64, probe_divisor: f64) -> Self {
        Self {
            beacon: KindStyle {
                shape: SatelliteShape::Octahedron,
                size: sphere_radius / beacon_divisor,
                color: Vec3::new(0.39, 0.98, 0.08),
            },
            probe: KindStyle {
                shape: SatelliteShape::Tetrahedron,
                size: sphere_radius / probe_divisor,
                color: Vec3::new(0.78, 0.39, 0.08),
            },
        }
    }

    pub fn style(&self, kind: SatelliteKind) -> &KindStyle {
        match kind {
            SatelliteKind::Beacon => &self.beacon,
            SatelliteKind::Probe => &self.probe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_scale_with_sphere() {
        let set = StyleSet::for_sphere(26.0, 13.0, 16.0);
        assert_eq!(set.style(SatelliteKind::Beacon).size, 2.0);
        assert_eq!(set.style(SatelliteKind::Probe).size, 26.0 / 16.0);
        assert_eq!(
            set.style(SatelliteKind::Beacon).shape,
            SatelliteShape::Octahedron
        );
        assert_eq!(
            set.style(SatelliteKind::Probe).shape,
            SatelliteShape::Tetrahedron
        );
    }

    #[test]
    fn glow_shell_matches_orbit_scale() {
        assert!((glow_radius(10.0) - 12.0).abs() < 1e-12);
    }
}
