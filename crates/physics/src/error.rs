use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RigError {
    #[error("rest length must be finite and positive, got {0}")]
    InvalidRestLength(f32),
    #[error("solver needs at least one iteration")]
    NoSolverIterations,
    #[error("gravity {0} is outside the tunable range 0..=5")]
    GravityOutOfRange(f32),
    #[error("{0} must be finite and positive, got {1}")]
    InvalidScale(&'static str, f32),
    #[error("anchor position must be finite, got {0:?}")]
    NonFiniteAnchor([f32; 3]),
    #[error("failed to read rig config {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed rig config")]
    Parse(#[from] serde_json::Error),
}
