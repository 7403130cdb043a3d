//! Configuration for the sphere-map widget.
//!
//! Runtime-tunable settings persisted to disk as RON, with CLI overrides
//! via clap. Forward/backward compatible: unknown fields are ignored and
//! missing sections fall back to defaults.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, SatelliteConfig, SphereConfig};
pub use error::ConfigError;
