//! Planet self-rotation clock.

use std::f64::consts::TAU;

use glam::DQuat;

/// Accumulated Y-axis rotation of the planet mesh.
///
/// Advanced once per frame with the same `dt` the solver receives; the
/// rendering layer applies [`rotation`](Self::rotation) to the planet
/// transform.
#[derive(Debug, Clone)]
pub struct SphereSpin {
    /// Angular velocity around +Y, in radians per second.
    pub angular_velocity: f64,
    /// Current rotation angle, wrapped to `[0, 2π)`.
    pub angle: f64,
    /// Freezes the spin without losing the current angle.
    pub paused: bool,
}

impl SphereSpin {
    pub fn new(angular_velocity: f64) -> Self {
        Self {
            angular_velocity,
            angle: 0.0,
            paused: false,
        }
    }

    /// Advance the rotation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if self.paused {
            return;
        }
        self.angle = (self.angle + self.angular_velocity * dt).rem_euclid(TAU);
    }

    /// Current planet rotation as a quaternion.
    pub fn rotation(&self) -> DQuat {
        DQuat::from_rotation_y(self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_and_wraps() {
        let mut spin = SphereSpin::new(1.0);
        spin.tick(1.5);
        assert!((spin.angle - 1.5).abs() < 1e-12);
        spin.tick(TAU);
        assert!((spin.angle - 1.5).abs() < 1e-9, "angle did not wrap");
    }

    #[test]
    fn paused_spin_holds_angle() {
        let mut spin = SphereSpin::new(2.0);
        spin.tick(0.25);
        let held = spin.angle;
        spin.paused = true;
        spin.tick(10.0);
        assert_eq!(spin.angle, held);
    }

    #[test]
    fn rotation_quaternion_tracks_angle() {
        let mut spin = SphereSpin::new(std::f64::consts::FRAC_PI_2);
        spin.tick(1.0);
        let rotated = spin.rotation() * glam::DVec3::X;
        // Quarter turn around +Y carries +X onto -Z.
        assert!((rotated - glam::DVec3::NEG_Z).length() < 1e-9);
    }
}
