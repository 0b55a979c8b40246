//! Error types for the application host.

/// Mount target error.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// The target element id is empty.
    #[error("mount target id cannot be empty")]
    EmptyTarget,
}

/// Application host error.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The mount target rejected a patch or could not be created.
    #[error("{0}")]
    Mount(#[from] MountError),
}
