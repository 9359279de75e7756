//! Error types for registry operations.

/// Errors produced by a [`GameRegistry`](crate::GameRegistry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no game named {0:?}")]
    NotFound(String),

    #[error("a game named {0:?} already exists")]
    Duplicate(String),
}

impl RegistryError {
    /// Whether this error is a lookup miss rather than a storage failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
