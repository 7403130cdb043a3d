//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "gyre.ron";

/// Top-level widget configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet sphere settings.
    pub sphere: SphereConfig,
    /// Satellite motion and styling settings.
    pub satellites: SatelliteConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Planet sphere settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SphereConfig {
    /// Planet radius in scene units.
    pub radius: f64,
    /// Mesh subdivision count, forwarded to the rendering layer.
    pub segments: u32,
    /// Self-rotation speed in radians per second.
    pub angular_velocity: f64,
    /// Glow shell (and satellite orbit) radius as a multiple of the planet
    /// radius.
    pub glow_scale: f64,
}

/// Satellite motion and styling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SatelliteConfig {
    /// Convergence-speed multiplier of the motion solver.
    pub damping: f64,
    /// Beacon polyhedron radius is `sphere.radius / beacon_size_divisor`.
    pub beacon_size_divisor: f64,
    /// Probe polyhedron radius is `sphere.radius / probe_size_divisor`.
    pub probe_size_divisor: f64,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn"). Empty means use
    /// the built-in default.
    pub log_level: String,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            segments: 50,
            angular_velocity: 0.05,
            glow_scale: 1.2,
        }
    }
}

impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            damping: 0.2,
            beacon_size_divisor: 13.0,
            probe_size_divisor: 16.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: String::new(),
        }
    }
}

impl Config {
    /// Satellite orbit radius: the satellites drift on the glow shell.
    pub fn orbit_radius(&self) -> f64 {
        self.sphere.radius * self.sphere.glow_scale
    }

    /// Load config from `config_dir/gyre.ron`, or write a default file
    /// there if none exists yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to `config_dir/gyre.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let pretty = ron::ser::PrettyConfig::new().depth_limit(2);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::Write)?;
        Ok(())
    }
}
