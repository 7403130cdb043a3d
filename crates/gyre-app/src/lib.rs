//! Frame driving and wiring for the sphere-map widget: the animation loop,
//! the frame clock, and the glue that keeps the solver's satellite map and
//! the host's visual map in sync by id.

mod animation_loop;
mod clock;

pub use animation_loop::{AnimationLoop, StopFlag};
pub use clock::FrameClock;

use glam::{DQuat, DVec3};
use tracing::info;

use gyre_config::Config;
use gyre_scene::{KindStyle, SphereSpin, StyleSet, VisualRegistry, face_center};
use gyre_solver::{NormalizedPos, OrbitSolver, SatelliteId, SatelliteKind, SolverError};

/// The assembled widget state, minus rendering.
///
/// Generic over `V`, the host's visual resource type. All satellite
/// lifecycle goes through [`add_satellite`](Self::add_satellite) and
/// [`remove_satellite`](Self::remove_satellite) so the solver map and the
/// visual map never drift apart.
pub struct GyreApp<V> {
    config: Config,
    solver: OrbitSolver,
    spin: SphereSpin,
    styles: StyleSet,
    visuals: VisualRegistry<V>,
}

impl<V> GyreApp<V> {
    pub fn new(config: Config) -> Self {
        let solver = OrbitSolver::new(config.orbit_radius(), config.satellites.damping);
        let spin = SphereSpin::new(config.sphere.angular_velocity);
        let styles = StyleSet::for_sphere(
            config.sphere.radius,
            config.satellites.beacon_size_divisor,
            config.satellites.probe_size_divisor,
        );
        info!(
            orbit_radius = solver.orbit_radius(),
            damping = solver.damping(),
            "sphere map initialized"
        );
        Self {
            config,
            solver,
            spin,
            styles,
            visuals: VisualRegistry::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn solver(&self) -> &OrbitSolver {
        &self.solver
    }

    pub fn spin(&self) -> &SphereSpin {
        &self.spin
    }

    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    pub fn visuals(&self) -> &VisualRegistry<V> {
        &self.visuals
    }

    pub fn visuals_mut(&mut self) -> &mut VisualRegistry<V> {
        &mut self.visuals
    }

    /// Register a satellite and build its visual in one step.
    ///
    /// `build_visual` receives the Cartesian spawn position, the rotation
    /// that makes the visual face the sphere center, and the style for the
    /// satellite's kind. On [`SolverError::DuplicateId`] nothing changes and
    /// no visual is built.
    pub fn add_satellite(
        &mut self,
        id: SatelliteId,
        kind: SatelliteKind,
        initial: NormalizedPos,
        target: NormalizedPos,
        build_visual: impl FnOnce(DVec3, DQuat, &KindStyle) -> V,
    ) -> Result<DVec3, SolverError> {
        let position = self.solver.add_satellite(id, kind, initial, target)?;
        let visual = build_visual(position, face_center(position), self.styles.style(kind));
        self.visuals.attach(id, visual);
        Ok(position)
    }

    /// Remove a satellite from the solver and detach its visual.
    ///
    /// Returns the visual so the caller can dispose GPU resources. `None`
    /// only if the host never attached one.
    pub fn remove_satellite(&mut self, id: SatelliteId) -> Result<Option<V>, SolverError> {
        self.solver.remove_satellite(id)?;
        Ok(self.visuals.detach(id))
    }

    /// Advance one frame: spin the planet, then step the motion solver.
    /// The host reads positions back afterwards to place visuals.
    pub fn update(&mut self, dt: f64) {
        self.spin.tick(dt);
        self.solver.step(dt);
    }
}
