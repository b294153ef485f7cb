/// Error types for the projection pipeline
use thiserror::Error;

/// Failure modes of the perspective-divide stage.
///
/// Numeric degeneracy is the only failure mode in the pipeline: a
/// camera-space z of zero, or a non-finite intermediate, would otherwise
/// propagate silently as NaN/Infinity screen coordinates.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionError {
    /// The transformed point sits on the camera's z-plane
    #[error("point '{label}' lies on the camera z-plane, cannot perspective-divide")]
    CameraPlane { label: &'static str },

    /// The perspective divide produced a NaN or infinite coordinate
    #[error("projection of point '{label}' produced a non-finite coordinate")]
    NonFinite { label: &'static str },
}

/// Result type alias using the pipeline's error type.
pub type Result<T> = std::result::Result<T, ProjectionError>;
