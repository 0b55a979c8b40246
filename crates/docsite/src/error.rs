//! CLI error types.

use docsite_app::{HostError, MountError};
use docsite_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Host(#[from] HostError),

    #[error("{0}")]
    Mount(#[from] MountError),

    #[error("Failed to serialize state: {0}")]
    Json(#[from] serde_json::Error),
}
