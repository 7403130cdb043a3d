//! Force-based position solver for satellites on a fixed-radius sphere.

use glam::DVec3;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::SolverError;
use crate::satellite::{NormalizedPos, Satellite, SatelliteId, SatelliteKind};

/// Registry and motion solver for all live satellites.
///
/// Each [`step`](Self::step) pulls every satellite along the sphere surface
/// toward its fixed target and pushes it away from every other satellite,
/// then renormalizes the result back onto the orbit sphere. Updates are
/// simultaneous: every satellite sees the positions as they were before the
/// step began, so the outcome does not depend on registration order.
pub struct OrbitSolver {
    orbit_radius: f64,
    damping: f64,
    satellites: FxHashMap<SatelliteId, Satellite>,
}

impl OrbitSolver {
    /// Create a solver for the given orbit sphere.
    ///
    /// `orbit_radius` and `damping` must both be positive; `damping` scales
    /// the per-second displacement and so controls convergence speed.
    pub fn new(orbit_radius: f64, damping: f64) -> Self {
        debug_assert!(orbit_radius > 0.0 && damping > 0.0);
        Self {
            orbit_radius,
            damping,
            satellites: FxHashMap::default(),
        }
    }

    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    /// Register a satellite and return its Cartesian spawn position on the
    /// orbit sphere, which the scene host uses to place and orient the
    /// visual object.
    ///
    /// Fails with [`SolverError::DuplicateId`] if `id` is already live;
    /// existing state is left untouched.
    pub fn add_satellite(
        &mut self,
        id: SatelliteId,
        kind: SatelliteKind,
        initial: NormalizedPos,
        target: NormalizedPos,
    ) -> Result<DVec3, SolverError> {
        if self.satellites.contains_key(&id) {
            return Err(SolverError::DuplicateId(id));
        }
        let position = initial.to_cartesian(self.orbit_radius);
        let target = target.to_cartesian(self.orbit_radius);
        self.satellites.insert(
            id,
            Satellite {
                kind,
                position,
                target,
            },
        );
        debug!(%id, ?kind, ?position, "satellite registered");
        Ok(position)
    }

    /// Discard all solver state for `id`. The satellite stops influencing
    /// others from the next step on.
    pub fn remove_satellite(&mut self, id: SatelliteId) -> Result<(), SolverError> {
        match self.satellites.remove(&id) {
            Some(_) => {
                debug!(%id, "satellite removed");
                Ok(())
            }
            None => Err(SolverError::NotFound(id)),
        }
    }

    /// Current position of a satellite, if registered.
    pub fn position(&self, id: SatelliteId) -> Option<DVec3> {
        self.satellites.get(&id).map(|s| s.position)
    }

    /// Fixed target position of a satellite, if registered.
    pub fn target(&self, id: SatelliteId) -> Option<DVec3> {
        self.satellites.get(&id).map(|s| s.target)
    }

    pub fn kind(&self, id: SatelliteId) -> Option<SatelliteKind> {
        self.satellites.get(&id).map(|s| s.kind)
    }

    /// Iterate over all live satellites in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (SatelliteId, &Satellite)> {
        self.satellites.iter().map(|(id, sat)| (*id, sat))
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// For each satellite, against a snapshot of all pre-step positions:
    ///
    /// 1. Sum the repulsion `(p − pₒ) / |p − pₒ|²` over every other
    ///    satellite `o`. The magnitude grows without bound as two
    ///    satellites approach each other.
    /// 2. Take the component of `(target − p)` tangent to the sphere at `p`
    ///    (two successive cross products), normalize it, and scale by the
    ///    straight-line distance to the target, so the pull fades to zero
    ///    on arrival.
    /// 3. Displace by `(repulsion + pull) · dt · damping`, then rescale the
    ///    position back to the orbit radius.
    ///
    /// The snapshot is traversed in ascending id order, which makes the
    /// floating-point result independent of registration order.
    ///
    /// Precondition: no two satellites share an exact position. Coincident
    /// satellites make the repulsion term divide by zero and propagate
    /// non-finite coordinates; the solver deliberately does not clamp the
    /// denominator.
    pub fn step(&mut self, dt: f64) {
        let mut snapshot: Vec<(SatelliteId, DVec3, DVec3)> = self
            .satellites
            .iter()
            .map(|(id, s)| (*id, s.position, s.target))
            .collect();
        snapshot.sort_unstable_by_key(|&(id, _, _)| id);

        let mut updated = Vec::with_capacity(snapshot.len());
        for &(id, position, target) in &snapshot {
            let mut repulsion = DVec3::ZERO;
            for &(other, other_pos, _) in &snapshot {
                if other == id {
                    continue;
                }
                let diff = position - other_pos;
                repulsion += diff / diff.length_squared();
            }

            // Tangential great-circle direction toward the target; zero when
            // position and target are parallel (at the target, or antipodal
            // to it), where the scaling distance is what keeps it sound.
            let pull = position.cross(target).cross(position).normalize_or_zero()
                * position.distance(target);

            let displaced = position + (repulsion + pull) * dt * self.damping;
            updated.push((id, displaced.normalize() * self.orbit_radius));
        }

        for (id, position) in updated {
            if let Some(sat) = self.satellites.get_mut(&id) {
                sat.position = position;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver() -> OrbitSolver {
        OrbitSolver::new(10.0, 0.2)
    }

    #[test]
    fn add_returns_cartesian_spawn_position() {
        let mut s = solver();
        let pos = s
            .add_satellite(
                SatelliteId::new(1),
                SatelliteKind::Beacon,
                NormalizedPos::new(0.0, 0.5),
                NormalizedPos::new(0.25, 0.5),
            )
            .unwrap();
        assert!((pos - DVec3::new(10.0, 0.0, 0.0)).length() < 1e-9);
        assert_eq!(s.position(SatelliteId::new(1)), Some(pos));
    }

    #[test]
    fn duplicate_add_fails_and_preserves_state() {
        let mut s = solver();
        let id = SatelliteId::new(7);
        let original = s
            .add_satellite(
                id,
                SatelliteKind::Probe,
                NormalizedPos::new(0.1, 0.3),
                NormalizedPos::new(0.6, 0.8),
            )
            .unwrap();
        let err = s
            .add_satellite(
                id,
                SatelliteKind::Beacon,
                NormalizedPos::new(0.9, 0.9),
                NormalizedPos::new(0.2, 0.2),
            )
            .unwrap_err();
        assert_eq!(err, SolverError::DuplicateId(id));
        assert_eq!(s.position(id), Some(original));
        assert_eq!(s.kind(id), Some(SatelliteKind::Probe));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn remove_unknown_fails() {
        let mut s = solver();
        let err = s.remove_satellite(SatelliteId::new(42)).unwrap_err();
        assert_eq!(err, SolverError::NotFound(SatelliteId::new(42)));
    }

    #[test]
    fn remove_discards_state() {
        let mut s = solver();
        let id = SatelliteId::new(3);
        s.add_satellite(
            id,
            SatelliteKind::Beacon,
            NormalizedPos::new(0.0, 0.5),
            NormalizedPos::new(0.5, 0.5),
        )
        .unwrap();
        s.remove_satellite(id).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.position(id), None);
        assert_eq!(s.remove_satellite(id), Err(SolverError::NotFound(id)));
    }

    #[test]
    fn step_with_no_satellites_is_a_no_op() {
        let mut s = solver();
        s.step(1.0);
        assert!(s.is_empty());
    }
}
