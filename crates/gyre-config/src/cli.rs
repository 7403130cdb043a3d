//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Sphere-map widget command-line arguments.
///
/// CLI values override settings loaded from `gyre.ron`.
#[derive(Parser, Debug)]
#[command(name = "gyre", about = "Planet sphere with drifting satellites")]
pub struct CliArgs {
    /// Planet radius in scene units.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Planet self-rotation speed in radians per second.
    #[arg(long)]
    pub angular_velocity: Option<f64>,

    /// Motion solver damping factor.
    #[arg(long)]
    pub damping: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of satellites the demo scatters on the orbit shell.
    #[arg(long, default_value_t = 12)]
    pub satellites: u32,

    /// Number of frames the demo runs before stopping.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(r) = args.radius {
            self.sphere.radius = r;
        }
        if let Some(w) = args.angular_velocity {
            self.sphere.angular_velocity = w;
        }
        if let Some(d) = args.damping {
            self.satellites.damping = d;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let mut config = Config::default();
        let args = CliArgs::parse_from(["gyre", "--radius", "30", "--damping", "0.4"]);
        config.apply_cli_overrides(&args);
        assert_eq!(config.sphere.radius, 30.0);
        assert_eq!(config.satellites.damping, 0.4);
        assert_eq!(
            config.sphere.angular_velocity,
            Config::default().sphere.angular_velocity
        );
    }

    #[test]
    fn demo_flags_have_defaults() {
        let args = CliArgs::parse_from(["gyre"]);
        assert_eq!(args.satellites, 12);
        assert_eq!(args.frames, 600);
        assert!(args.config.is_none());
    }
}
