use thiserror::Error;

/// Errors raised while wiring meshes or loading a rig configuration.
#[derive(Error, Debug)]
pub enum RigError {
    #[error("Vertex count mismatch: mesh has {expected} vertices, got {actual}")]
    VertexCountMismatch { expected: usize, actual: usize },
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RigResult<T> = Result<T, RigError>;
