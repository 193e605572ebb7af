use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("failed to read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("invalid value for {var}: {message}")]
    InvalidEnv { var: &'static str, message: String },

    #[error("api base url {0} must use http or https")]
    UnsupportedScheme(String),

    #[error("api timeout must be greater than zero")]
    ZeroTimeout,

    #[error("carousel preset `{preset}`: {message}")]
    InvalidPreset {
        preset: &'static str,
        message: String,
    },
}
