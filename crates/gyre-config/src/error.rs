//! Configuration error types.

/// Errors from loading or persisting the RON config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read config file: {0}")]
    Read(#[source] std::io::Error),

    /// The config file or its directory could not be written.
    #[error("could not write config file: {0}")]
    Write(#[source] std::io::Error),

    /// The file's RON content did not parse.
    #[error("malformed config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// Serializing the config to RON failed.
    #[error("could not serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
