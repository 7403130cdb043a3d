//! Headless demo: scatter satellites on the orbit shell and run the
//! animation loop without a renderer, reporting positions via tracing.
//!
//! Run with `cargo run -p gyre-app` or override settings via CLI flags,
//! e.g. `cargo run -p gyre-app -- --radius 26 --satellites 20 --frames 300`.

use clap::Parser;
use glam::{DQuat, DVec3, Vec3};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::info;

use gyre_app::{AnimationLoop, GyreApp};
use gyre_config::{CliArgs, Config};
use gyre_scene::SatelliteShape;
use gyre_solver::{NormalizedPos, SatelliteId, SatelliteKind};

/// Stand-in for a GPU object: just the data a renderer would have used.
#[derive(Debug)]
struct DemoVisual {
    shape: SatelliteShape,
    size: f64,
    color: Vec3,
    position: DVec3,
    orientation: DQuat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut config = match &args.config {
        Some(dir) => Config::load_or_create(dir)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    gyre_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    let mut app: GyreApp<DemoVisual> = GyreApp::new(config);

    // Fixed seed keeps demo runs reproducible.
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);
    for i in 0..args.satellites {
        let id = SatelliteId::new(u64::from(i));
        let kind = if rng.gen_bool(0.5) {
            SatelliteKind::Beacon
        } else {
            SatelliteKind::Probe
        };
        let initial = NormalizedPos::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
        let target = NormalizedPos::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
        app.add_satellite(id, kind, initial, target, |position, orientation, style| {
            DemoVisual {
                shape: style.shape,
                size: style.size,
                color: style.color,
                position,
                orientation,
            }
        })?;
    }
    info!(count = args.satellites, "satellites scattered");

    let mut animation = AnimationLoop::new();
    let stop = animation.stop_flag();
    let removal_frame = args.frames / 2;
    let mut frame = 0u64;

    animation.run(|dt| {
        frame += 1;
        app.update(dt);

        // Read positions back and move the stand-in visuals, the same flow
        // a renderer would follow after each step.
        let placements: Vec<(SatelliteId, DVec3)> = app
            .solver()
            .iter()
            .map(|(id, sat)| (id, sat.position))
            .collect();
        for (id, position) in placements {
            if let Some(visual) = app.visuals_mut().get_mut(id) {
                visual.position = position;
                visual.orientation = gyre_scene::face_center(position);
            }
        }

        if frame == removal_frame && app.solver().len() > 1 {
            let id = SatelliteId::new(0);
            match app.remove_satellite(id) {
                Ok(disposed) => info!(%id, ?disposed, "satellite removed mid-run"),
                Err(err) => info!(%err, "mid-run removal skipped"),
            }
        }

        if frame % 120 == 0 {
            if let Some((id, sat)) = app.solver().iter().next() {
                let remaining = sat.position.distance(sat.target);
                if let Some(visual) = app.visuals().get(id) {
                    info!(
                        frame,
                        %id,
                        shape = ?visual.shape,
                        size = visual.size,
                        color = ?visual.color,
                        x = visual.position.x,
                        y = visual.position.y,
                        z = visual.position.z,
                        facing = ?visual.orientation,
                        remaining,
                        "sample satellite"
                    );
                }
            }
        }

        if frame >= args.frames {
            stop.stop();
        }
    });

    info!(
        frames = animation.frame_count(),
        satellites = app.solver().len(),
        spin_angle = app.spin().angle,
        "demo finished"
    );
    Ok(())
}
